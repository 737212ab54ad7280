//! Event handling and state transition logic.
//!
//! This module translates named events from the event source into exactly one
//! [`FilterState`](super::FilterState) update followed by one full evaluation.
//!
//! # Architecture
//!
//! ```text
//! Event Source → Event → handle_event → one state update → evaluate → QueryResult → Render Sink
//! ```
//!
//! Events are processed one at a time to completion; there is no queueing or
//! concurrency inside a session.
//!
//! # Event Wire Format
//!
//! Events deserialize from JSON tagged by `kind`:
//!
//! ```json
//! {"kind": "search_changed", "text": "runner"}
//! {"kind": "category_toggled", "category": "footwear", "on": true}
//! {"kind": "sort_changed", "by": "price", "order": "desc"}
//! {"kind": "page_changed", "page": 2}
//! ```

use super::modes::{SortBy, SortOrder};
use super::session::Session;
use crate::domain::Category;
use crate::engine::QueryResult;
use serde::{Deserialize, Serialize};

/// Named user interactions, each carrying the payload of one update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// The search box text changed.
    SearchChanged { text: String },

    /// A category checkbox was checked or unchecked.
    CategoryToggled { category: Category, on: bool },

    /// A brand checkbox was checked or unchecked.
    ///
    /// `token` is the brand label; it is lower-cased before use.
    BrandToggled { token: String, on: bool },

    /// A minimum-rating checkbox was checked or unchecked.
    RatingToggled { value: u8, on: bool },

    /// A sort button was pressed.
    SortChanged {
        by: SortBy,
        #[serde(default)]
        order: SortOrder,
    },

    /// The minimum price input changed. `raw` is the unparsed input text.
    PriceMinChanged { raw: String },

    /// The maximum price input changed. `raw` is the unparsed input text.
    PriceMaxChanged { raw: String },

    /// A pagination button was pressed.
    PageChanged { page: usize },
}

/// Applies one event to the session and re-evaluates the catalog.
///
/// Every event except [`Event::PageChanged`] resets the page to 1 before
/// evaluation. The returned result reflects any page clamping, which is also
/// written back to the session state.
///
/// # Example
///
/// ```rust
/// use vitrine::{handle_event, Catalog, CategoryRules, Event, RawItem, Session};
///
/// let catalog = Catalog::ingest(
///     vec![RawItem::new("Alpha Runner", 90, 4.5), RawItem::new("Gamma Hat", 30, 3.0)],
///     &CategoryRules::default(),
/// );
/// let mut session = Session::new(catalog, 6);
///
/// let result = handle_event(&mut session, &Event::SearchChanged { text: "alpha".into() });
/// assert_eq!(result.total_count, 1);
/// assert_eq!(result.visible_items[0].name, "Alpha Runner");
/// ```
pub fn handle_event(session: &mut Session, event: &Event) -> QueryResult {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let state = session.state_mut();
    match event {
        Event::SearchChanged { text } => {
            tracing::trace!(query = %text, "search query updated");
            state.set_search(text);
        }
        Event::CategoryToggled { category, on } => {
            state.toggle_category(*category, *on);
        }
        Event::BrandToggled { token, on } => {
            state.toggle_brand(token, *on);
        }
        Event::RatingToggled { value, on } => {
            state.toggle_min_rating(*value, *on);
        }
        Event::SortChanged { by, order } => {
            state.set_sort(*by, *order);
        }
        Event::PriceMinChanged { raw } => {
            state.set_price_min(raw);
            tracing::debug!(raw = %raw, parsed = state.price_min(), "minimum price updated");
        }
        Event::PriceMaxChanged { raw } => {
            state.set_price_max(raw);
            tracing::debug!(raw = %raw, parsed = state.price_max(), "maximum price updated");
        }
        Event::PageChanged { page } => {
            state.go_to_page(*page);
        }
    }

    session.evaluate()
}
