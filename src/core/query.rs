//! Query parameters, sort keys and pagination metadata

use crate::config::EngineConfig;
use crate::core::error::QueryError;
use crate::core::item::Item;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field the result set is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Numeric suffix of the item name
    #[default]
    Name,
    Category,
    Price,
    #[serde(alias = "in_stock")]
    InStock,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Category => "category",
            SortField::Price => "price",
            SortField::InStock => "inStock",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "category" => Ok(SortField::Category),
            "price" => Ok(SortField::Price),
            "inStock" | "in_stock" => Ok(SortField::InStock),
            other => Err(QueryError::UnsupportedSortField(other.to_string())),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(QueryError::UnsupportedSortOrder(other.to_string())),
        }
    }
}

/// A sort field paired with a direction
///
/// # Format
/// - `field` or `field:asc` (ascending)
/// - `field:desc` (descending)
///
/// # Example
/// ```
/// use catalog::core::query::{SortField, SortOrder, SortSpec};
///
/// let spec: SortSpec = "price:desc".parse().unwrap();
/// assert_eq!(spec.field, SortField::Price);
/// assert_eq!(spec.order, SortOrder::Desc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl FromStr for SortSpec {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, order) = match s.split_once(':') {
            Some((field, order)) => (field, order.parse()?),
            None => (s, SortOrder::Asc),
        };

        Ok(Self {
            field: field.parse()?,
            order,
        })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.order)
    }
}

/// Filter, sort and pagination state owned by the caller
///
/// Every field has a neutral default: no filter is active, results are
/// ordered by name ascending, and the first page of ten rows is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryParams {
    /// Case-insensitive substring matched against the item name
    pub search_name: String,

    /// Exact category match; empty means no category filter
    pub selected_category: String,

    /// Inclusive lower price bound
    pub min_price: Option<f64>,

    /// Inclusive upper price bound
    pub max_price: Option<f64>,

    /// Keep only items in stock
    pub show_in_stock_only: bool,

    pub sort_by: SortField,

    pub sort_order: SortOrder,

    /// Zero-based page index
    pub page: usize,

    pub rows_per_page: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search_name: String::new(),
            selected_category: String::new(),
            min_price: None,
            max_price: None,
            show_in_stock_only: false,
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
            page: 0,
            rows_per_page: 10,
        }
    }
}

impl QueryParams {
    /// Fresh parameters using the configured default page size
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            rows_per_page: config.default_rows_per_page,
            ..Self::default()
        }
    }

    /// Number of filters set to a non-default value
    ///
    /// Counts search text, category, each price bound and the in-stock flag.
    /// Sorting and pagination are not filters.
    pub fn active_filter_count(&self) -> usize {
        [
            !self.search_name.is_empty(),
            !self.selected_category.is_empty(),
            self.min_price.is_some(),
            self.max_price.is_some(),
            self.show_in_stock_only,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Clear every filter, restore name-ascending order and go back to page 0
    ///
    /// The page size is kept.
    pub fn clear_filters(&mut self) {
        *self = Self {
            rows_per_page: self.rows_per_page,
            ..Self::default()
        };
    }

    /// Apply a sort-header activation
    ///
    /// Activating the current field flips the direction; any other field is
    /// selected in ascending order.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_by == field {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_by = field;
            self.sort_order = SortOrder::Asc;
        }
    }

    /// Change the page size and return to the first page
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page;
        self.page = 0;
    }

    /// Return to the first page, typically after a filter edit
    pub fn reset_page(&mut self) {
        self.page = 0;
    }

    pub fn sort_spec(&self) -> SortSpec {
        SortSpec {
            field: self.sort_by,
            order: self.sort_order,
        }
    }

    pub fn set_sort(&mut self, spec: SortSpec) {
        self.sort_by = spec.field;
        self.sort_order = spec.order;
    }
}

/// Pagination metadata for a computed page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Zero-based page index as requested (never clamped)
    pub page: usize,

    pub rows_per_page: usize,

    /// Number of items after filtering
    pub total: usize,

    pub total_pages: usize,

    pub has_next: bool,

    pub has_prev: bool,

    /// 1-based position of the first row shown, 0 when the page is empty
    pub from: usize,

    /// 1-based position of the last row shown, 0 when the page is empty
    pub to: usize,
}

impl PaginationMeta {
    pub fn new(page: usize, rows_per_page: usize, total: usize) -> Self {
        // Guard the divisions; the engine rejects a zero page size before this point
        let rows_per_page = rows_per_page.max(1);
        let total_pages = if total == 0 {
            0
        } else {
            total.div_ceil(rows_per_page)
        };
        let start = page.saturating_mul(rows_per_page);
        let end = start.saturating_add(rows_per_page).min(total);
        let (from, to) = if start < total {
            (start + 1, end)
        } else {
            (0, 0)
        };

        Self {
            page,
            rows_per_page,
            total,
            total_pages,
            has_next: end < total,
            has_prev: page > 0,
            from,
            to,
        }
    }
}

/// Everything a presentation layer needs to render one state of the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOutput {
    /// Distinct categories across the whole collection, in first-seen order
    pub categories: Vec<String>,

    /// Number of items passing the filters
    pub filtered_count: usize,

    /// Items on the requested page
    pub items: Vec<Item>,

    pub pagination: PaginationMeta,

    /// Number of active filters, for a filter badge
    pub active_filters: usize,
}
