//! HTTP surface for the query engine
//!
//! A thin presentation adapter: query strings become [`QueryParams`],
//! the engine runs over a shared [`ItemStore`], results come back as JSON.
//!
//! [`QueryParams`]: crate::core::QueryParams
//! [`ItemStore`]: crate::core::ItemStore

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::{AppState, CategoriesResponse, ListQuery, PageSizesResponse};
pub use router::build_catalog_routes;
