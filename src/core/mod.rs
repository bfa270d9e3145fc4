//! Core module containing the item model, query types and the query engine

pub mod engine;
pub mod error;
pub mod item;
pub mod query;
pub mod store;

pub use engine::QueryEngine;
pub use error::{CatalogError, CatalogResult, ConfigError, ItemError, LoadError, QueryError};
pub use item::Item;
pub use query::{PaginationMeta, QueryOutput, QueryParams, SortField, SortOrder, SortSpec};
pub use store::ItemStore;
