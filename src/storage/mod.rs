//! Storage implementations for raw item collections

pub mod in_memory;

pub use in_memory::InMemoryCatalog;
