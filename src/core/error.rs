//! Typed error handling for the catalog query engine
//!
//! # Error Categories
//!
//! - [`QueryError`]: invalid query parameters (fail fast, never defaulted)
//! - [`ConfigError`]: engine configuration parsing and validation
//! - [`LoadError`]: loading the raw item collection
//!
//! Empty results are never errors. A query that matches nothing, or a page
//! index past the end of the filtered set, yields an empty page.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog::prelude::*;
//!
//! match engine.run(&items, &params) {
//!     Ok(output) => render(output),
//!     Err(QueryError::UnsupportedRowsPerPage { allowed, .. }) => {
//!         eprintln!("pick one of {:?}", allowed);
//!     }
//!     Err(e) => eprintln!("query rejected: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the catalog crate
#[derive(Debug)]
pub enum CatalogError {
    /// Query parameter errors
    Query(QueryError),

    /// Configuration errors
    Config(ConfigError),

    /// Item collection loading errors
    Load(LoadError),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Query(e) => write!(f, "{}", e),
            CatalogError::Config(e) => write!(f, "{}", e),
            CatalogError::Load(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Query(e) => Some(e),
            CatalogError::Config(e) => Some(e),
            CatalogError::Load(e) => Some(e),
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Query(_) => StatusCode::BAD_REQUEST,
            CatalogError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Load(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Query(e) => e.error_code(),
            CatalogError::Config(_) => "CONFIG_ERROR",
            CatalogError::Load(_) => "LOAD_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            CatalogError::Query(QueryError::UnsupportedRowsPerPage {
                rows_per_page,
                allowed,
            }) => Some(serde_json::json!({
                "rows_per_page": rows_per_page,
                "allowed": allowed,
            })),
            CatalogError::Query(QueryError::InvalidParameter { field, value }) => {
                Some(serde_json::json!({ "field": field, "value": value }))
            }
            CatalogError::Load(LoadError::InvalidItem { index, .. }) => {
                Some(serde_json::json!({ "index": index }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Invalid query parameters
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// Pagination was asked for zero rows per page
    #[error("rows per page must be greater than zero")]
    ZeroRowsPerPage,

    /// Rows per page is not one of the configured options
    #[error("rows per page {rows_per_page} is not one of the allowed sizes {allowed:?}")]
    UnsupportedRowsPerPage {
        rows_per_page: usize,
        allowed: Vec<usize>,
    },

    /// Sort field is not one of name, category, price, inStock
    #[error("unsupported sort field '{0}'")]
    UnsupportedSortField(String),

    /// Sort order is not asc or desc
    #[error("unsupported sort order '{0}'")]
    UnsupportedSortOrder(String),

    /// A price bound is NaN or infinite
    #[error("{bound} must be a finite number (value: {value})")]
    InvalidPriceBound { bound: &'static str, value: f64 },

    /// A query string value does not parse as the expected type
    #[error("invalid value '{value}' for parameter '{field}'")]
    InvalidParameter { field: &'static str, value: String },

    /// The query string itself could not be decoded
    #[error("malformed query string: {0}")]
    MalformedQueryString(String),
}

impl QueryError {
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::ZeroRowsPerPage => "INVALID_ROWS_PER_PAGE",
            QueryError::UnsupportedRowsPerPage { .. } => "INVALID_ROWS_PER_PAGE",
            QueryError::UnsupportedSortField(_) => "UNSUPPORTED_SORT_FIELD",
            QueryError::UnsupportedSortOrder(_) => "UNSUPPORTED_SORT_ORDER",
            QueryError::InvalidPriceBound { .. } => "INVALID_PRICE_BOUND",
            QueryError::InvalidParameter { .. } => "INVALID_PARAMETER",
            QueryError::MalformedQueryString(_) => "MALFORMED_QUERY_STRING",
        }
    }
}

impl From<QueryError> for CatalogError {
    fn from(err: QueryError) -> Self {
        CatalogError::Query(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to engine configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", .file.as_ref().map(|f| format!(" file '{}'", f)).unwrap_or_default())]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    IoError { message: String },
}

impl From<ConfigError> for CatalogError {
    fn from(err: ConfigError) -> Self {
        CatalogError::Config(err)
    }
}

// =============================================================================
// Load Errors
// =============================================================================

/// Errors raised while loading the raw item collection
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Item data could not be parsed
    #[error("Failed to parse items{}: {message}", .file.as_ref().map(|f| format!(" file '{}'", f)).unwrap_or_default())]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// A record violates the item invariants
    #[error("Invalid item at index {index}: {reason}")]
    InvalidItem {
        index: usize,
        #[source]
        reason: ItemError,
    },

    /// Item data file not found
    #[error("Item data file not found: {path}")]
    FileNotFound { path: String },

    /// IO error while reading item data
    #[error("IO error: {message}")]
    IoError { message: String },
}

impl From<LoadError> for CatalogError {
    fn from(err: LoadError) -> Self {
        CatalogError::Load(err)
    }
}

/// Why a single record was rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ItemError {
    #[error("price of '{name}' must be a finite number (value: {price})")]
    NonFinitePrice { name: String, price: f64 },

    #[error("price of '{name}' must not be negative (value: {price})")]
    NegativePrice { name: String, price: f64 },
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;
