//! The filter, sort and paginate pipeline.
//!
//! # Pipeline
//!
//! 1. **Text**: lower-cased name contains the lower-cased search text
//! 2. **Category**: category is one of the selected categories
//! 3. **Brand**: lower-cased name contains at least one brand token
//! 4. **Rating**: rating is at least the highest checked threshold
//! 5. **Price**: `price_min <= price <= price_max`, always applied
//! 6. **Sort**: stable sort by the selected field, ties keep ingestion order
//! 7. **Paginate**: clamp the page and slice out the window
//!
//! Stages 1 to 4 are skipped when their criterion is empty. Every stage keeps
//! relative order, so with no sort field the result is in ingestion order.

use super::result::QueryResult;
use crate::app::{FilterState, SortBy};
use crate::domain::{Catalog, CatalogItem};
use std::cmp::Ordering;

/// Evaluates the pipeline over `catalog` for the criteria in `state`.
///
/// Never fails: criteria that match nothing (including an inverted price
/// range or an empty catalog) yield an empty page 1 of 1.
///
/// # State Write-Back
///
/// If `state.page()` is beyond the last page, the page in `state` is lowered
/// to the last page before this function returns. This is the only mutation
/// the engine performs; everything else in `state` and `catalog` is read-only.
///
/// # Example
///
/// ```rust
/// use vitrine::{evaluate, Catalog, CategoryRules, FilterState, RawItem};
///
/// let records = (1..=13).map(|i| RawItem::new(format!("Item {i}"), i * 10, 4.0)).collect();
/// let catalog = Catalog::ingest(records, &CategoryRules::default());
/// let mut state = FilterState::for_catalog(&catalog);
///
/// state.go_to_page(5);
/// let result = evaluate(&catalog, &mut state);
///
/// assert_eq!(result.total_pages, 3);
/// assert_eq!(result.current_page, 3);
/// assert_eq!(state.page(), 3);
/// assert_eq!(result.visible_ids(), vec![12]);
/// ```
pub fn evaluate(catalog: &Catalog, state: &mut FilterState) -> QueryResult {
    let _span = tracing::debug_span!("evaluate",
        catalog_size = catalog.len(),
        page = state.page(),
        sort_by = ?state.sort_by()
    ).entered();

    let mut matched = filter_items(catalog.items(), state);
    sort_items(&mut matched, state);

    let total_count = matched.len();
    let per_page = state.per_page();
    let total_pages = total_count.div_ceil(per_page).max(1);

    state.clamp_page(total_pages);
    let current_page = state.page();

    let start = (current_page - 1) * per_page;
    let visible_items: Vec<CatalogItem> = matched
        .into_iter()
        .skip(start)
        .take(per_page)
        .cloned()
        .collect();

    tracing::debug!(
        total_count,
        total_pages,
        current_page,
        visible = visible_items.len(),
        "query evaluated"
    );

    QueryResult {
        visible_items,
        total_count,
        total_pages,
        current_page,
    }
}

/// Applies every filter stage, preserving ingestion order.
fn filter_items<'a>(items: &'a [CatalogItem], state: &FilterState) -> Vec<&'a CatalogItem> {
    let search = state.search().to_lowercase();
    let min_rating = state.effective_min_rating().map(f64::from);

    items
        .iter()
        .filter(|item| {
            let name = item.name_key();

            if !search.is_empty() && !name.contains(&search) {
                return false;
            }

            if !state.categories().is_empty() && !state.categories().contains(&item.category) {
                return false;
            }

            if !state.brands().is_empty()
                && !state.brands().iter().any(|brand| name.contains(brand.as_str()))
            {
                return false;
            }

            if min_rating.is_some_and(|threshold| item.rating < threshold) {
                return false;
            }

            item.price >= state.price_min() && item.price <= state.price_max()
        })
        .collect()
}

/// Stable sort by the selected field; no-op for [`SortBy::None`].
fn sort_items(items: &mut [&CatalogItem], state: &FilterState) {
    let order = state.sort_order();
    match state.sort_by() {
        SortBy::None => {}
        SortBy::Price => items.sort_by(|a, b| order.apply(a.price.cmp(&b.price))),
        SortBy::Rating => items.sort_by(|a, b| {
            order.apply(a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal))
        }),
    }
}
