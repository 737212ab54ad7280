//! Records scraped from rendered product cards.
//!
//! Presentation adapters that extract items from existing markup deliver the
//! card's text fields verbatim. These helpers turn that text into a
//! [`RawItem`] with the storefront's permissive rules: the price keeps only
//! its digits and the rating keeps only digits and dots.

use crate::domain::parse::{parse_decimal, parse_digits};
use crate::domain::RawItem;

impl RawItem {
    /// Builds a record from the text of a product card.
    ///
    /// # Example
    ///
    /// ```
    /// use vitrine::RawItem;
    ///
    /// let item = RawItem::from_card_text("  Trail Sneaker\n", "12 990 ₽", "★ 4.8");
    /// assert_eq!(item.name, "Trail Sneaker");
    /// assert_eq!(item.price, 12990);
    /// assert_eq!(item.rating, 4.8);
    /// ```
    #[must_use]
    pub fn from_card_text(name: &str, price_text: &str, rating_text: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            price: parse_digits(price_text),
            rating: parse_decimal(rating_text),
        }
    }
}
