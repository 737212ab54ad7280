//! Output of one pipeline evaluation.

use crate::domain::CatalogItem;
use serde::Serialize;

/// The visible page of a filtered, sorted catalog.
///
/// `total_pages` is never 0: an empty result is still page 1 of 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    /// Items on the current page, in display order.
    pub visible_items: Vec<CatalogItem>,
    /// Number of items matching every filter, across all pages.
    pub total_count: usize,
    /// Number of pages, at least 1.
    pub total_pages: usize,
    /// The page actually shown, after clamping.
    pub current_page: usize,
}

impl QueryResult {
    /// Returns `true` if no item matched.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Ids of the visible items, in display order.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<usize> {
        self.visible_items.iter().map(|item| item.id).collect()
    }
}
