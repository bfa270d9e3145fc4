//! The catalog query engine
//!
//! A pure transformation from a raw item collection and [`QueryParams`] to
//! the page of results a caller renders. The pipeline is always
//! `filter -> sort -> paginate`; pagination indices are only meaningful
//! against the filtered and sorted sequence.
//!
//! The engine never mutates the collection it is given. Every stage borrows
//! its input and returns a new sequence of references into the raw items, so
//! the same collection can be queried repeatedly with identical results.
//!
//! # Example
//!
//! ```
//! use catalog::prelude::*;
//!
//! let items = vec![
//!     Item::new("Item 10", "A", 300.0, true),
//!     Item::new("Item 2", "B", 100.0, false),
//!     Item::new("Item 1", "A", 200.0, true),
//! ];
//! let engine = QueryEngine::default();
//! let params = QueryParams {
//!     selected_category: "A".to_string(),
//!     ..QueryParams::default()
//! };
//!
//! let output = engine.run(&items, &params).unwrap();
//! assert_eq!(output.filtered_count, 2);
//! assert_eq!(output.items[0].name, "Item 1");
//! assert_eq!(output.categories, vec!["A", "B"]);
//! ```

use crate::config::{EngineConfig, MissingKeyPolicy};
use crate::core::error::QueryError;
use crate::core::item::Item;
use crate::core::query::{PaginationMeta, QueryOutput, QueryParams, SortField, SortOrder};
use indexmap::IndexSet;
use std::cmp::Ordering;

/// Stateless query engine
///
/// Holds only immutable configuration, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    config: EngineConfig,
}

impl QueryEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Distinct categories across the whole collection, in first-seen order
    ///
    /// Independent of any filter, so a category selector always offers every
    /// category.
    pub fn list_categories<'a, I>(&self, items: I) -> IndexSet<String>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut categories = IndexSet::new();
        for item in items {
            if !categories.contains(item.category.as_str()) {
                categories.insert(item.category.clone());
            }
        }
        categories
    }

    /// Keep the items satisfying every active filter, in input order
    pub fn filter<'a, I>(&self, items: I, params: &QueryParams) -> Vec<&'a Item>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let needle = params.search_name.to_lowercase();

        items
            .into_iter()
            .filter(|item| {
                (needle.is_empty() || item.name.to_lowercase().contains(&needle))
                    && (params.selected_category.is_empty()
                        || item.category == params.selected_category)
                    && params.min_price.is_none_or(|min| item.price >= min)
                    && params.max_price.is_none_or(|max| item.price <= max)
                    && (!params.show_in_stock_only || item.in_stock)
            })
            .collect()
    }

    /// Order items by `sort_by` in the given direction
    ///
    /// The sort is stable: items comparing equal keep their input order in
    /// both directions.
    pub fn sort<'a, I>(&self, items: I, sort_by: SortField, order: SortOrder) -> Vec<&'a Item>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut sorted: Vec<&'a Item> = items.into_iter().collect();

        match sort_by {
            SortField::Name => {
                // Parse each key once instead of on every comparison
                let mut keyed: Vec<(Option<f64>, &'a Item)> =
                    sorted.into_iter().map(|item| (item.name_key(), item)).collect();
                keyed.sort_by(|(a, _), (b, _)| self.compare_name_keys(*a, *b, order));
                sorted = keyed.into_iter().map(|(_, item)| item).collect();
            }
            SortField::Category => {
                sorted.sort_by(|a, b| directed(a.category.cmp(&b.category), order))
            }
            SortField::Price => sorted.sort_by(|a, b| directed(a.price.total_cmp(&b.price), order)),
            SortField::InStock => {
                sorted.sort_by(|a, b| directed(a.in_stock.cmp(&b.in_stock), order))
            }
        }

        sorted
    }

    /// The `page`-th window of `rows_per_page` items
    ///
    /// A window starting at or past the end is empty. `page` is never clamped;
    /// resetting it after the result set shrinks is up to the caller.
    pub fn paginate<'s, T>(
        &self,
        items: &'s [T],
        page: usize,
        rows_per_page: usize,
    ) -> Result<&'s [T], QueryError> {
        if rows_per_page == 0 {
            return Err(QueryError::ZeroRowsPerPage);
        }

        let start = page.saturating_mul(rows_per_page);
        if start >= items.len() {
            return Ok(&[]);
        }
        let end = start.saturating_add(rows_per_page).min(items.len());
        Ok(&items[start..end])
    }

    /// Number of active filters, for display only
    pub fn count_active_filters(&self, params: &QueryParams) -> usize {
        params.active_filter_count()
    }

    /// Reject parameters the pipeline must not silently default
    pub fn validate(&self, params: &QueryParams) -> Result<(), QueryError> {
        if params.rows_per_page == 0 {
            return Err(QueryError::ZeroRowsPerPage);
        }
        if !self.config.allows_rows_per_page(params.rows_per_page) {
            return Err(QueryError::UnsupportedRowsPerPage {
                rows_per_page: params.rows_per_page,
                allowed: self.config.page_size_options.clone(),
            });
        }

        for (bound, value) in [("min_price", params.min_price), ("max_price", params.max_price)] {
            if let Some(value) = value.filter(|v| !v.is_finite()) {
                return Err(QueryError::InvalidPriceBound { bound, value });
            }
        }

        Ok(())
    }

    /// Run the full pipeline: categories, filter, sort, paginate and counts
    pub fn run(&self, items: &[Item], params: &QueryParams) -> Result<QueryOutput, QueryError> {
        self.validate(params)?;

        let categories = self.list_categories(items).into_iter().collect();
        let filtered = self.filter(items, params);
        let sorted = self.sort(filtered, params.sort_by, params.sort_order);
        let page_items: Vec<Item> = self
            .paginate(&sorted, params.page, params.rows_per_page)?
            .iter()
            .map(|item| (*item).clone())
            .collect();

        tracing::debug!(
            total = items.len(),
            filtered = sorted.len(),
            page = params.page,
            rows_per_page = params.rows_per_page,
            returned = page_items.len(),
            sort = %params.sort_spec(),
            "catalog query evaluated"
        );

        Ok(QueryOutput {
            categories,
            filtered_count: sorted.len(),
            items: page_items,
            pagination: PaginationMeta::new(params.page, params.rows_per_page, sorted.len()),
            active_filters: self.count_active_filters(params),
        })
    }

    fn compare_name_keys(&self, a: Option<f64>, b: Option<f64>, order: SortOrder) -> Ordering {
        match self.config.missing_name_key {
            MissingKeyPolicy::Zero => {
                directed(a.unwrap_or(0.0).total_cmp(&b.unwrap_or(0.0)), order)
            }
            MissingKeyPolicy::Last => match (a, b) {
                (Some(a), Some(b)) => directed(a.total_cmp(&b), order),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}
