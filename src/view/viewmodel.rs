//! View model types representing a renderable catalog page.
//!
//! View models are computed from a [`QueryResult`] and contain no business
//! logic, only display-ready data. Sinks consume them as-is.
//!
//! # Example
//!
//! ```rust
//! use vitrine::view::PageView;
//! use vitrine::QueryResult;
//!
//! let result = QueryResult {
//!     visible_items: vec![],
//!     total_count: 14,
//!     total_pages: 3,
//!     current_page: 2,
//! };
//! let view = PageView::from_result(&result);
//! assert_eq!(view.pagination.len(), 3);
//! assert!(view.pagination[1].active);
//! ```

use crate::domain::CatalogItem;
use crate::engine::QueryResult;
use serde::Serialize;

/// Complete view model for one rendered page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    /// Items to show, in display order.
    pub items: Vec<CatalogItem>,

    /// Number of items matching the current criteria.
    pub total_count: usize,

    /// Page currently shown.
    pub current_page: usize,

    /// Pagination buttons.
    ///
    /// Empty when everything fits on one page, so the pager is hidden.
    pub pagination: Vec<PageButton>,

    /// Whether nothing matched the current criteria.
    pub empty: bool,
}

/// A single pagination button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageButton {
    /// 1-based page this button navigates to.
    pub page: usize,

    /// Whether this is the page currently shown.
    pub active: bool,
}

impl PageView {
    /// Builds the view model for an evaluated page.
    #[must_use]
    pub fn from_result(result: &QueryResult) -> Self {
        let pagination = if result.total_pages <= 1 {
            vec![]
        } else {
            (1..=result.total_pages)
                .map(|page| PageButton {
                    page,
                    active: page == result.current_page,
                })
                .collect()
        };

        Self {
            items: result.visible_items.clone(),
            total_count: result.total_count,
            current_page: result.current_page,
            pagination,
            empty: result.is_empty(),
        }
    }
}
