//! Store trait for raw item collections

use crate::core::item::Item;

/// Source of the raw item collection a surface queries against
///
/// Implementors hand out the full, unfiltered collection. The engine never
/// writes through this trait, so the collection keeps its original order for
/// the lifetime of the store.
pub trait ItemStore: Send + Sync {
    /// Get all items (unfiltered, unsorted)
    fn list_all(&self) -> &[Item];

    /// Number of items in the collection
    fn len(&self) -> usize {
        self.list_all().len()
    }

    fn is_empty(&self) -> bool {
        self.list_all().is_empty()
    }
}
