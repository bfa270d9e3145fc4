//! In-memory item catalog loaded once per session

use crate::core::error::{LoadError, QueryError};
use crate::core::{Item, ItemStore, QueryEngine, QueryOutput, QueryParams};
use std::path::Path;
use std::sync::Arc;

/// Immutable, cheaply clonable item collection
///
/// Items are validated on load and never reordered afterwards; every query
/// reads the same sequence.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    items: Arc<[Item]>,
}

impl InMemoryCatalog {
    /// Build a catalog from already-decoded items
    pub fn new(items: Vec<Item>) -> Result<Self, LoadError> {
        for (index, item) in items.iter().enumerate() {
            if let Err(reason) = item.validate() {
                tracing::warn!(index, name = %item.name, "rejecting catalog item: {}", reason);
                return Err(LoadError::InvalidItem { index, reason });
            }
        }

        tracing::info!(items = items.len(), "catalog loaded");

        Ok(Self {
            items: items.into(),
        })
    }

    /// Load a catalog from a JSON array of items
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Self::parse(json, None)
    }

    /// Load a catalog from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LoadError::IoError {
                message: e.to_string(),
            },
        })?;

        Self::parse(&content, Some(path))
    }

    fn parse(json: &str, file: Option<&Path>) -> Result<Self, LoadError> {
        let items: Vec<Item> = serde_json::from_str(json).map_err(|e| LoadError::ParseError {
            file: file.map(|p| p.display().to_string()),
            message: e.to_string(),
        })?;
        Self::new(items)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Run the query pipeline over this catalog
    pub fn query(
        &self,
        engine: &QueryEngine,
        params: &QueryParams,
    ) -> Result<QueryOutput, QueryError> {
        engine.run(&self.items, params)
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }
}

impl ItemStore for InMemoryCatalog {
    fn list_all(&self) -> &[Item] {
        &self.items
    }
}
