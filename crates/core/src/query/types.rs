//! Query data types.

use rust_decimal::Decimal;

/// Inclusive `[min, max]` constraint on one field.
///
/// Only takes effect when both bounds are present; a lone bound matches
/// every record. For the `date` field the bounds are years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeFilter {
    /// Field the range applies to.
    pub field: String,
    /// Lower bound (inclusive).
    pub min: Option<Decimal>,
    /// Upper bound (inclusive).
    pub max: Option<Decimal>,
}

impl RangeFilter {
    /// Creates a filter from optional bounds.
    #[must_use]
    pub fn new(field: impl Into<String>, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        Self {
            field: field.into(),
            min,
            max,
        }
    }

    /// Creates a filter with both bounds set.
    #[must_use]
    pub fn between(field: impl Into<String>, min: Decimal, max: Decimal) -> Self {
        Self::new(field, Some(min), Some(max))
    }

    /// Returns both bounds when the filter is active.
    #[must_use]
    pub fn bounds(&self) -> Option<(Decimal, Decimal)> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }

    /// Returns true if both bounds are present.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.bounds().is_some()
    }
}

/// Field and direction used to order records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Field to sort by.
    pub field: String,
    /// Sort ascending when true, descending otherwise.
    pub ascending: bool,
}

impl SortSpec {
    /// Sorts by `field` in ascending order.
    #[must_use]
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
        }
    }

    /// Sorts by `field` in descending order.
    #[must_use]
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: false,
        }
    }
}

/// A parsed caller request: range filters plus an optional sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Range filters, combined with AND.
    pub filters: Vec<RangeFilter>,
    /// Sort applied after filtering.
    pub sort: Option<SortSpec>,
}

impl Query {
    /// Creates an empty query (matches everything, keeps input order).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a range filter.
    #[must_use]
    pub fn with_filter(mut self, filter: RangeFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Sets the sort.
    #[must_use]
    pub fn sorted_by(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }
}
