//! Category inference from item names.
//!
//! Categories are derived at ingestion time by an ordered list of keyword
//! rules. A name is lower-cased and checked against each rule in turn; the
//! first rule with a keyword contained in the name decides the category, and
//! names matching nothing fall into [`Category::Other`].
//!
//! The rule order is the tie-break policy for names that match more than one
//! rule ("sneaker hoodie" is footwear under the built-in rules), so it is kept
//! exactly as written.
//!
//! # Built-in Rule Sets
//!
//! - `en`: English stems (default)
//! - `ru`: Russian stems used by the original storefront
//!
//! # TOML Format
//!
//! ```toml
//! name = "custom"
//!
//! [[rules]]
//! category = "footwear"
//! keywords = ["shoe", "sneaker"]
//!
//! [[rules]]
//! category = "electronics"
//! keywords = ["headphone", "sony"]
//! ```

use super::error::{CatalogError, Result};
use super::item::Category;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A single `(keywords -> category)` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }

    fn matches(&self, name_lower: &str) -> bool {
        self.keywords.iter().any(|keyword| name_lower.contains(keyword.as_str()))
    }
}

/// Ordered first-match category rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRules {
    /// Human-readable rule set name.
    pub name: String,
    /// Rules in evaluation order.
    pub rules: Vec<CategoryRule>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self::english()
    }
}

impl CategoryRules {
    /// Loads a built-in rule set by name.
    ///
    /// Supported names: `en`, `ru`.
    ///
    /// # Example
    ///
    /// ```
    /// use vitrine::{Category, CategoryRules};
    ///
    /// let rules = CategoryRules::from_name("ru").unwrap();
    /// assert_eq!(rules.infer("Кроссовки беговые"), Category::Footwear);
    /// assert!(CategoryRules::from_name("klingon").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "en" => Some(Self::english()),
            "ru" => Some(Self::russian()),
            _ => None,
        }
    }

    /// Loads a rule set from a TOML file.
    ///
    /// Keywords are lower-cased on load so matching stays case-insensitive
    /// regardless of how the file is written.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Rules`] if it is not a valid rule set.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading category rules");

        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parses a rule set from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Rules`] if the text is not a valid rule set or
    /// contains a rule without keywords.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut rules: Self = toml::from_str(contents)
            .map_err(|e| CatalogError::Rules(format!("failed to parse rules: {e}")))?;

        for rule in &mut rules.rules {
            rule.keywords = rule
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
            if rule.keywords.is_empty() {
                return Err(CatalogError::Rules(format!(
                    "rule for '{}' has no keywords",
                    rule.category
                )));
            }
        }

        tracing::debug!(name = %rules.name, rule_count = rules.rules.len(), "category rules loaded");
        Ok(rules)
    }

    /// Infers the category of an item from its name.
    ///
    /// Case-insensitive substring match; the first matching rule wins.
    #[must_use]
    pub fn infer(&self, name: &str) -> Category {
        let name_lower = name.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&name_lower))
            .map_or(Category::Other, |rule| rule.category)
    }

    fn english() -> Self {
        Self {
            name: "en".to_string(),
            rules: vec![
                CategoryRule::new(Category::Footwear, &["footwear", "sneaker"]),
                CategoryRule::new(Category::Apparel, &["jeans"]),
                CategoryRule::new(Category::Apparel, &["hoodie"]),
                CategoryRule::new(Category::Apparel, &["t-shirt"]),
                CategoryRule::new(Category::Accessories, &["accessor"]),
                CategoryRule::new(Category::Electronics, &["headphone", "sony"]),
            ],
        }
    }

    fn russian() -> Self {
        Self {
            name: "ru".to_string(),
            rules: vec![
                CategoryRule::new(Category::Footwear, &["обув", "кроссов"]),
                CategoryRule::new(Category::Apparel, &["джинс"]),
                CategoryRule::new(Category::Apparel, &["худи"]),
                CategoryRule::new(Category::Apparel, &["футбол"]),
                CategoryRule::new(Category::Accessories, &["аксесс"]),
                CategoryRule::new(Category::Electronics, &["наушник", "sony"]),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_each_builtin_category() {
        let rules = CategoryRules::default();
        assert_eq!(rules.infer("Running Sneaker"), Category::Footwear);
        assert_eq!(rules.infer("Slim Jeans"), Category::Apparel);
        assert_eq!(rules.infer("Zip Hoodie"), Category::Apparel);
        assert_eq!(rules.infer("Basic T-Shirt"), Category::Apparel);
        assert_eq!(rules.infer("Accessory Kit"), Category::Accessories);
        assert_eq!(rules.infer("Wireless Headphones"), Category::Electronics);
        assert_eq!(rules.infer("SONY Speaker"), Category::Electronics);
        assert_eq!(rules.infer("Water Bottle"), Category::Other);
    }

    #[test]
    fn first_matching_rule_wins() {
        let rules = CategoryRules::default();
        assert_eq!(rules.infer("Sneaker Hoodie"), Category::Footwear);
        assert_eq!(rules.infer("Hoodie with Sony print"), Category::Apparel);
    }

    #[test]
    fn russian_rules_match_storefront_names() {
        let rules = CategoryRules::from_name("ru").unwrap();
        assert_eq!(rules.infer("Джинсы классические"), Category::Apparel);
        assert_eq!(rules.infer("Наушники Sony WH-1000"), Category::Electronics);
        assert_eq!(rules.infer("Футболка"), Category::Apparel);
        assert_eq!(rules.infer("Рюкзак"), Category::Other);
    }

    #[test]
    fn toml_rules_are_lowercased() {
        let rules = CategoryRules::from_toml(
            r#"
            name = "custom"

            [[rules]]
            category = "accessories"
            keywords = ["  BELT "]
            "#,
        )
        .unwrap();
        assert_eq!(rules.rules[0].keywords, vec!["belt".to_string()]);
        assert_eq!(rules.infer("Leather belt"), Category::Accessories);
    }

    #[test]
    fn toml_rule_without_keywords_is_rejected() {
        let err = CategoryRules::from_toml(
            r#"
            name = "broken"

            [[rules]]
            category = "footwear"
            keywords = []
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Rules(_)));
    }

    #[test]
    fn toml_with_unknown_category_is_rejected() {
        let err = CategoryRules::from_toml(
            r#"
            name = "broken"

            [[rules]]
            category = "gadgets"
            keywords = ["x"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Rules(_)));
    }

    #[test]
    fn rules_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.toml");
        fs::write(
            &path,
            "name = \"file\"\n\n[[rules]]\ncategory = \"footwear\"\nkeywords = [\"boot\"]\n",
        )
        .unwrap();

        let rules = CategoryRules::from_file(&path).unwrap();
        assert_eq!(rules.name, "file");
        assert_eq!(rules.infer("Hiking Boot"), Category::Footwear);
    }

    #[test]
    fn missing_rules_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CategoryRules::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
