//! Sort selector types.
//!
//! The sort criterion is a field plus a direction. The direction only has
//! meaning when a field is selected; [`SortBy::None`] keeps ingestion order.
//!
//! # Example
//!
//! ```rust
//! use vitrine::{SortBy, SortOrder};
//! use std::cmp::Ordering;
//!
//! let by = SortBy::Price;
//! assert_eq!(SortOrder::Descending.apply(Ordering::Less), Ordering::Greater);
//! assert!(by.is_active());
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Field the visible items are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Keep ingestion order.
    #[default]
    #[serde(alias = "default")]
    None,
    Price,
    Rating,
}

impl SortBy {
    /// Returns `true` if a sort field is selected.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    /// Largest first.
    #[serde(alias = "desc")]
    Descending,
}

impl SortOrder {
    /// Applies this direction to an ordering.
    ///
    /// Equal keys stay equal in both directions, which is what lets a stable
    /// sort keep ingestion order for ties.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}
