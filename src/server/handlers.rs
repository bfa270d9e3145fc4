//! HTTP handlers for catalog queries
//!
//! Handlers translate query strings into [`QueryParams`], run the engine over
//! the shared store and return JSON. They hold no per-request state beyond
//! the parameters they build.
//!
//! Query string values arrive as raw text and are parsed here, so a value of
//! the wrong type is reported as a [`QueryError`] in the JSON error body.
//! A blank value (`min_price=`) is the same as leaving the parameter out.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use crate::config::EngineConfig;
use crate::core::error::{CatalogResult, QueryError};
use crate::core::{ItemStore, QueryEngine, QueryOutput, QueryParams, SortSpec};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
    pub engine: Arc<QueryEngine>,
}

/// Query string accepted by `GET /items`
///
/// # Example
/// ```text
/// GET /items?search=lamp&category=Home&min_price=10&max_price=80
/// GET /items?in_stock=true&sort=price:desc&page=1&limit=25
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    /// Case-insensitive name substring
    pub search: Option<String>,

    /// Exact category
    pub category: Option<String>,

    pub min_price: Option<String>,

    pub max_price: Option<String>,

    /// Only items in stock (`true` or `false`)
    pub in_stock: Option<String>,

    /// `field` or `field:asc|desc`
    pub sort: Option<String>,

    /// Zero-based page index
    pub page: Option<String>,

    /// Rows per page
    pub limit: Option<String>,
}

impl ListQuery {
    /// Convert into engine parameters, falling back to configured defaults
    pub fn into_params(self, config: &EngineConfig) -> Result<QueryParams, QueryError> {
        let mut params = QueryParams::new(config);

        params.search_name = self.search.unwrap_or_default();
        params.selected_category = self.category.unwrap_or_default();
        params.min_price = parse_param("min_price", self.min_price.as_deref())?;
        params.max_price = parse_param("max_price", self.max_price.as_deref())?;
        params.show_in_stock_only =
            parse_param("in_stock", self.in_stock.as_deref())?.unwrap_or(false);

        if let Some(sort) = self.sort.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            params.set_sort(sort.parse::<SortSpec>()?);
        }
        if let Some(limit) = parse_param("limit", self.limit.as_deref())? {
            params.rows_per_page = limit;
        }
        params.page = parse_param("page", self.page.as_deref())?.unwrap_or(0);

        Ok(params)
    }
}

/// Parse one query string value, treating a missing or blank value as unset
fn parse_param<T: FromStr>(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<T>, QueryError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| QueryError::InvalidParameter {
                field,
                value: value.to_string(),
            }),
    }
}

/// Response for the categories endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
    pub count: usize,
}

/// Response for the page sizes endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct PageSizesResponse {
    pub options: Vec<usize>,
    pub default: usize,
}

/// List one page of items
///
/// GET /items
pub async fn list_items(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> CatalogResult<Json<QueryOutput>> {
    let Query(query) =
        query.map_err(|rejection| QueryError::MalformedQueryString(rejection.body_text()))?;
    let params = query.into_params(state.engine.config())?;
    let output = state.engine.run(state.store.list_all(), &params)?;
    Ok(Json(output))
}

/// List every category in the catalog, regardless of filters
///
/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let categories: Vec<String> = state
        .engine
        .list_categories(state.store.list_all())
        .into_iter()
        .collect();

    Json(CategoriesResponse {
        count: categories.len(),
        categories,
    })
}

/// Page sizes a client may offer
///
/// GET /page-sizes
pub async fn page_sizes(State(state): State<AppState>) -> Json<PageSizesResponse> {
    let config = state.engine.config();
    Json(PageSizesResponse {
        options: config.page_size_options.clone(),
        default: config.default_rows_per_page,
    })
}
