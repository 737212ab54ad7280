//! A single user's filtering session.
//!
//! [`Session`] pairs the immutable catalog with the one [`FilterState`] that
//! events mutate. It is the explicit owner of the state: nothing else holds a
//! reference to it, so no synchronization is needed.

use super::state::FilterState;
use crate::domain::Catalog;
use crate::engine::{self, QueryResult};

/// Catalog plus the criteria currently applied to it.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    state: FilterState,
}

impl Session {
    /// Starts a session with default criteria for `catalog`.
    ///
    /// The price ceiling is seeded from the catalog's highest price.
    #[must_use]
    pub fn new(catalog: Catalog, per_page: usize) -> Self {
        let state = FilterState::new(catalog.max_price(), per_page);
        tracing::debug!(
            item_count = catalog.len(),
            max_price = catalog.max_price(),
            per_page = state.per_page(),
            "session started"
        );
        Self { catalog, state }
    }

    /// Evaluates the current criteria, clamping the page if needed.
    pub fn evaluate(&mut self) -> QueryResult {
        engine::evaluate(&self.catalog, &mut self.state)
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut FilterState {
        &mut self.state
    }
}
