//! # catalog-query
//!
//! A query engine for browsing an in-memory item catalog: narrow it down with
//! filters, order it, and read it a page at a time.
//!
//! ## Features
//!
//! - **Pure pipeline**: `filter -> sort -> paginate`, never mutating the raw items
//! - **Numeric name ordering**: "Item 2" sorts before "Item 10"
//! - **Stable sorting**: equal keys keep their input order in both directions
//! - **Forgiving pagination**: a page past the end is empty, not an error
//! - **Fail-fast validation**: unsupported page sizes and sort keys are rejected
//! - **Configuration-Based**: page sizes and name-key fallback via YAML
//! - **HTTP surface**: optional axum routes serving pages as JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog::prelude::*;
//!
//! let catalog = InMemoryCatalog::from_json_str(r#"[
//!     {"name": "Product 10", "category": "Books", "price": 120, "inStock": true},
//!     {"name": "Product 2", "category": "Toys", "price": 35, "inStock": false},
//!     {"name": "Product 1", "category": "Books", "price": 80, "inStock": true}
//! ]"#)?;
//! let engine = QueryEngine::default();
//!
//! let mut params = QueryParams::default();
//! params.show_in_stock_only = true;
//! params.toggle_sort(SortField::Price);
//!
//! let output = catalog.query(&engine, &params)?;
//! assert_eq!(output.filtered_count, 2);
//! assert_eq!(output.items[0].name, "Product 1");
//! assert_eq!(output.active_filters, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        engine::QueryEngine,
        error::{
            CatalogError, CatalogResult, ConfigError, ItemError, LoadError, QueryError,
        },
        item::Item,
        query::{PaginationMeta, QueryOutput, QueryParams, SortField, SortOrder, SortSpec},
        store::ItemStore,
    };

    // === Storage ===
    pub use crate::storage::InMemoryCatalog;

    // === Config ===
    pub use crate::config::{EngineConfig, MissingKeyPolicy};

    // === Server ===
    pub use crate::server::{ListQuery, ServerBuilder};
}
