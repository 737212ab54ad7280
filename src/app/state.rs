//! Filter, sort and page state.
//!
//! [`FilterState`] holds the current value of every independent criterion the
//! user can adjust. It is owned by a single controller and changed only through
//! the named update operations below, each of which corresponds to exactly one
//! external event.
//!
//! # Page Reset Policy
//!
//! Every operation except [`FilterState::go_to_page`] resets the page cursor to
//! 1, because new criteria invalidate the previous page. The only other writer
//! of the page is the engine's clamp (see [`crate::engine::evaluate`]).
//!
//! # Example
//!
//! ```rust
//! use vitrine::{Category, FilterState};
//!
//! let mut state = FilterState::new(500, 6);
//! state.go_to_page(3);
//! state.toggle_category(Category::Footwear, true);
//! assert_eq!(state.page(), 1);
//! assert!(state.categories().contains(&Category::Footwear));
//! ```

use super::modes::{SortBy, SortOrder};
use crate::domain::parse::parse_digits;
use crate::domain::{Catalog, Category};
use std::collections::BTreeSet;

/// Number of items per page when none is configured.
pub const DEFAULT_PER_PAGE: usize = 6;

/// Current values of every filter, sort and page criterion.
///
/// A fresh state restricts nothing: empty search, empty category, brand and
/// rating sets, and a price range spanning the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    search: String,
    categories: BTreeSet<Category>,
    brands: BTreeSet<String>,
    min_ratings: BTreeSet<u8>,
    price_min: u32,
    price_max: u32,
    sort_by: SortBy,
    sort_order: SortOrder,
    page: usize,
    per_page: usize,
}

impl FilterState {
    /// Creates the default state for a catalog whose highest price is `max_price`.
    ///
    /// A `per_page` of 0 falls back to [`DEFAULT_PER_PAGE`].
    #[must_use]
    pub fn new(max_price: u32, per_page: usize) -> Self {
        Self {
            search: String::new(),
            categories: BTreeSet::new(),
            brands: BTreeSet::new(),
            min_ratings: BTreeSet::new(),
            price_min: 0,
            price_max: max_price,
            sort_by: SortBy::None,
            sort_order: SortOrder::Ascending,
            page: 1,
            per_page: if per_page == 0 { DEFAULT_PER_PAGE } else { per_page },
        }
    }

    /// Creates the default state for `catalog` with [`DEFAULT_PER_PAGE`].
    #[must_use]
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.max_price(), DEFAULT_PER_PAGE)
    }

    /// Sets the free-text search, trimming surrounding whitespace.
    ///
    /// An empty (or all-whitespace) text removes the text filter.
    pub fn set_search(&mut self, text: &str) {
        self.search = text.trim().to_string();
        self.reset_page();
    }

    /// Adds or removes a category restriction.
    pub fn toggle_category(&mut self, category: Category, on: bool) {
        if on {
            self.categories.insert(category);
        } else {
            self.categories.remove(&category);
        }
        self.reset_page();
    }

    /// Adds or removes a brand token.
    ///
    /// Tokens are trimmed and lower-cased; an empty token is ignored but the
    /// page is still reset.
    pub fn toggle_brand(&mut self, token: &str, on: bool) {
        let token = token.trim().to_lowercase();
        if !token.is_empty() {
            if on {
                self.brands.insert(token);
            } else {
                self.brands.remove(&token);
            }
        }
        self.reset_page();
    }

    /// Checks or unchecks a minimum-rating threshold.
    pub fn toggle_min_rating(&mut self, value: u8, on: bool) {
        if on {
            self.min_ratings.insert(value);
        } else {
            self.min_ratings.remove(&value);
        }
        self.reset_page();
    }

    /// Selects the sort field and direction together.
    pub fn set_sort(&mut self, by: SortBy, order: SortOrder) {
        self.sort_by = by;
        self.sort_order = order;
        self.reset_page();
    }

    /// Sets the lower price bound from raw input text.
    ///
    /// Non-digit characters are discarded and input without digits reads as 0.
    pub fn set_price_min(&mut self, raw: &str) {
        self.price_min = parse_digits(raw);
        self.reset_page();
    }

    /// Sets the upper price bound from raw input text.
    ///
    /// Same parsing as [`Self::set_price_min`]. An upper bound below the lower
    /// bound is kept as-is and simply matches nothing.
    pub fn set_price_max(&mut self, raw: &str) {
        self.price_max = parse_digits(raw);
        self.reset_page();
    }

    /// Moves the page cursor. Page 0 is treated as page 1.
    ///
    /// Out-of-range pages are accepted here and clamped on the next evaluation.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// The threshold actually applied: the highest checked rating.
    #[must_use]
    pub fn effective_min_rating(&self) -> Option<u8> {
        self.min_ratings.iter().next_back().copied()
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub const fn categories(&self) -> &BTreeSet<Category> {
        &self.categories
    }

    #[must_use]
    pub const fn brands(&self) -> &BTreeSet<String> {
        &self.brands
    }

    #[must_use]
    pub const fn min_ratings(&self) -> &BTreeSet<u8> {
        &self.min_ratings
    }

    #[must_use]
    pub const fn price_min(&self) -> u32 {
        self.price_min
    }

    #[must_use]
    pub const fn price_max(&self) -> u32 {
        self.price_max
    }

    #[must_use]
    pub const fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    /// Lowers the page cursor to `last_page`. Used only by the engine.
    pub(crate) fn clamp_page(&mut self, last_page: usize) {
        if self.page > last_page {
            tracing::debug!(from = self.page, to = last_page, "page clamped");
            self.page = last_page;
        }
    }

    fn reset_page(&mut self) {
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paged_state() -> FilterState {
        let mut state = FilterState::new(1000, 6);
        state.go_to_page(4);
        state
    }

    #[test]
    fn fresh_state_restricts_nothing() {
        let state = FilterState::new(750, 6);
        assert_eq!(state.search(), "");
        assert!(state.categories().is_empty());
        assert!(state.brands().is_empty());
        assert!(state.min_ratings().is_empty());
        assert_eq!(state.price_min(), 0);
        assert_eq!(state.price_max(), 750);
        assert_eq!(state.sort_by(), SortBy::None);
        assert_eq!(state.page(), 1);
        assert_eq!(state.per_page(), 6);
    }

    #[test]
    fn zero_per_page_uses_default() {
        assert_eq!(FilterState::new(0, 0).per_page(), DEFAULT_PER_PAGE);
    }

    #[test]
    fn every_filter_update_resets_page() {
        let updates: Vec<fn(&mut FilterState)> = vec![
            |s| s.set_search("shoe"),
            |s| s.toggle_category(Category::Apparel, true),
            |s| s.toggle_brand("Nike", true),
            |s| s.toggle_min_rating(4, true),
            |s| s.set_sort(SortBy::Price, SortOrder::Descending),
            |s| s.set_price_min("100"),
            |s| s.set_price_max("900"),
        ];

        for update in updates {
            let mut state = paged_state();
            update(&mut state);
            assert_eq!(state.page(), 1);
        }
    }

    #[test]
    fn go_to_page_changes_only_page() {
        let mut state = FilterState::new(100, 6);
        state.set_search("cap");
        let before = state.clone();
        state.go_to_page(3);
        assert_eq!(state.page(), 3);
        assert_eq!(state.search(), before.search());
        assert_eq!(state.price_max(), before.price_max());
    }

    #[test]
    fn page_zero_becomes_one() {
        let mut state = paged_state();
        state.go_to_page(0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn search_is_trimmed() {
        let mut state = FilterState::new(0, 6);
        state.set_search("  runner  ");
        assert_eq!(state.search(), "runner");
    }

    #[test]
    fn brand_tokens_are_normalized() {
        let mut state = FilterState::new(0, 6);
        state.toggle_brand(" Adidas ", true);
        assert!(state.brands().contains("adidas"));
        state.toggle_brand("ADIDAS", false);
        assert!(state.brands().is_empty());
    }

    #[test]
    fn empty_brand_token_is_ignored() {
        let mut state = paged_state();
        state.toggle_brand("   ", true);
        assert!(state.brands().is_empty());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn toggles_are_idempotent() {
        let mut once = FilterState::new(0, 6);
        once.toggle_category(Category::Footwear, true);
        let mut twice = once.clone();
        twice.toggle_category(Category::Footwear, true);
        assert_eq!(once, twice);
    }

    #[test]
    fn effective_rating_is_maximum() {
        let mut state = FilterState::new(0, 6);
        assert_eq!(state.effective_min_rating(), None);
        state.toggle_min_rating(3, true);
        state.toggle_min_rating(4, true);
        assert_eq!(state.effective_min_rating(), Some(4));
        state.toggle_min_rating(4, false);
        assert_eq!(state.effective_min_rating(), Some(3));
    }

    #[test]
    fn price_text_is_parsed_permissively() {
        let mut state = FilterState::new(500, 6);
        state.set_price_min("от 1 200 ₽");
        state.set_price_max("no limit");
        assert_eq!(state.price_min(), 1200);
        assert_eq!(state.price_max(), 0);
    }

    #[test]
    fn clamp_only_lowers_page() {
        let mut state = paged_state();
        state.clamp_page(10);
        assert_eq!(state.page(), 4);
        state.clamp_page(2);
        assert_eq!(state.page(), 2);
    }
}
