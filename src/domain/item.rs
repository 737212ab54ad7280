//! Catalog domain model.
//!
//! This module defines the immutable item types the engine filters over:
//! [`RawItem`] as delivered by an ingestion source, [`CatalogItem`] once it has
//! an identifier and an inferred [`Category`], and the [`Catalog`] that owns
//! them for the lifetime of a session.

use super::category::CategoryRules;
use super::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound of the rating scale.
pub const MAX_RATING: f64 = 5.0;

/// Closed set of product categories.
///
/// Categories are never read from the presentation layer; they are inferred
/// from the item name at ingestion time by [`CategoryRules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Footwear,
    Apparel,
    Accessories,
    Electronics,
    Other,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Footwear,
        Self::Apparel,
        Self::Accessories,
        Self::Electronics,
        Self::Other,
    ];

    /// Returns the stable lower-case name of this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Footwear => "footwear",
            Self::Apparel => "apparel",
            Self::Accessories => "accessories",
            Self::Electronics => "electronics",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == needle)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// An item record as produced by an ingestion source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawItem {
    pub name: String,
    pub price: u32,
    #[serde(default)]
    pub rating: f64,
}

impl RawItem {
    #[must_use]
    pub fn new(name: impl Into<String>, price: u32, rating: f64) -> Self {
        Self {
            name: name.into(),
            price,
            rating,
        }
    }
}

/// An ingested catalog entry.
///
/// `id` is the ingestion index and doubles as the final sort tie-break, so two
/// items never compare equal once ids are taken into account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: usize,
    pub name: String,
    pub category: Category,
    pub price: u32,
    pub rating: f64,
}

impl CatalogItem {
    /// Lower-cased name used by every substring filter.
    #[must_use]
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// The fixed, ordered collection of items for one session.
///
/// Built once by [`Catalog::ingest`] and never mutated afterwards. The engine
/// only ever borrows it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    max_price: u32,
}

impl Catalog {
    /// Ingests raw records in order.
    ///
    /// Assigns ids by position, infers each category with `rules`, sanitizes
    /// ratings into `[0, 5]` (non-finite values become 0) and records the
    /// highest price, which is 0 for an empty catalog.
    ///
    /// # Example
    ///
    /// ```
    /// use vitrine::{Catalog, Category, CategoryRules, RawItem};
    ///
    /// let catalog = Catalog::ingest(
    ///     vec![
    ///         RawItem::new("Trail Sneaker", 120, 4.5),
    ///         RawItem::new("Sony Headphones", 300, 4.8),
    ///     ],
    ///     &CategoryRules::default(),
    /// );
    ///
    /// assert_eq!(catalog.len(), 2);
    /// assert_eq!(catalog.max_price(), 300);
    /// assert_eq!(catalog.items()[0].category, Category::Footwear);
    /// assert_eq!(catalog.items()[1].category, Category::Electronics);
    /// ```
    #[must_use]
    pub fn ingest(records: Vec<RawItem>, rules: &CategoryRules) -> Self {
        let _span = tracing::debug_span!("catalog_ingest", records = records.len()).entered();

        let items: Vec<CatalogItem> = records
            .into_iter()
            .enumerate()
            .map(|(id, raw)| {
                let category = rules.infer(&raw.name);
                tracing::trace!(id, name = %raw.name, %category, "ingested item");
                CatalogItem {
                    id,
                    category,
                    price: raw.price,
                    rating: sanitize_rating(raw.rating),
                    name: raw.name,
                }
            })
            .collect();

        let max_price = items.iter().map(|item| item.price).max().unwrap_or(0);

        tracing::debug!(item_count = items.len(), max_price, "catalog ingested");

        Self { items, max_price }
    }

    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Highest price across the catalog, used to seed the price ceiling.
    #[must_use]
    pub const fn max_price(&self) -> u32 {
        self.max_price
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn sanitize_rating(rating: f64) -> f64 {
    if rating.is_finite() {
        rating.clamp(0.0, MAX_RATING)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Footwear".parse::<Category>().unwrap(), Category::Footwear);
        assert_eq!(" electronics ".parse::<Category>().unwrap(), Category::Electronics);
    }

    #[test]
    fn unknown_category_is_an_error() {
        let err = "gadgets".parse::<Category>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(name) if name == "gadgets"));
    }

    #[test]
    fn category_display_matches_serde_name() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }

    #[test]
    fn ingest_assigns_ids_in_order() {
        let catalog = Catalog::ingest(
            vec![
                RawItem::new("A", 10, 1.0),
                RawItem::new("B", 20, 2.0),
                RawItem::new("C", 5, 3.0),
            ],
            &CategoryRules::default(),
        );
        let ids: Vec<usize> = catalog.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(catalog.max_price(), 20);
    }

    #[test]
    fn empty_catalog_has_zero_max_price() {
        let catalog = Catalog::ingest(vec![], &CategoryRules::default());
        assert!(catalog.is_empty());
        assert_eq!(catalog.max_price(), 0);
    }

    #[test]
    fn ratings_are_sanitized() {
        let catalog = Catalog::ingest(
            vec![
                RawItem::new("A", 1, f64::NAN),
                RawItem::new("B", 1, 7.5),
                RawItem::new("C", 1, -1.0),
            ],
            &CategoryRules::default(),
        );
        let ratings: Vec<f64> = catalog.items().iter().map(|item| item.rating).collect();
        assert_eq!(ratings, vec![0.0, 5.0, 0.0]);
    }

    #[test]
    fn missing_rating_defaults_to_zero() {
        let raw: RawItem = serde_json::from_str(r#"{"name":"Cap","price":15}"#).unwrap();
        assert!(raw.rating.abs() < f64::EPSILON);
    }
}
