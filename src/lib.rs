//! Vitrine: a filter, sort and pagination engine for product catalogs.
//!
//! Vitrine derives the visible page of a fixed in-memory catalog from a set of
//! independent, composable criteria:
//! - Free-text search over item names
//! - Category, brand and minimum-rating checkboxes
//! - A price range
//! - A sort field and direction
//! - A page cursor
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Replay Driver (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event dispatch
//! │  - FilterState and its update operations            │
//! │  - Session (catalog + state owner)                  │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Ingestion     │   │ Engine        │   │ View          │
//! │ (ingest/)     │   │ (engine/)     │   │ (view/)       │
//! │ - JSON source │   │ - Filter      │   │ - Page model  │
//! │ - Card text   │   │ - Sort        │   │ - Render sink │
//! │               │   │ - Paginate    │   │ - JSON lines  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Catalog and items                                │
//! │  - Category inference rules                         │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Filter state, events and sessions
//! - [`domain`]: Catalog types, category rules, errors
//! - [`engine`]: The evaluation pipeline
//! - [`ingest`]: Ingestion sources
//! - [`view`]: View models and render sinks
//! - [`observability`]: Tracing setup
//!
//! # Control Flow
//!
//! One event produces exactly one state update followed by one full,
//! synchronous evaluation over the whole catalog. The catalog never changes
//! after ingestion; the only write the engine makes is lowering an
//! out-of-range page in the filter state.
//!
//! # Example
//!
//! ```rust
//! use vitrine::{handle_event, Catalog, CategoryRules, Event, RawItem, Session};
//!
//! let records = vec![
//!     RawItem::new("Alpha Runner Sneaker", 120, 4.6),
//!     RawItem::new("Beta Sock", 15, 3.2),
//!     RawItem::new("Gamma Hat", 40, 4.0),
//! ];
//! let catalog = Catalog::ingest(records, &CategoryRules::default());
//! let mut session = Session::new(catalog, 6);
//!
//! let result = session.evaluate();
//! assert_eq!(result.total_count, 3);
//!
//! let result = handle_event(&mut session, &Event::RatingToggled { value: 4, on: true });
//! assert_eq!(result.visible_ids(), vec![0, 2]);
//! ```

pub mod app;
pub mod domain;
pub mod engine;
pub mod ingest;
pub mod observability;
pub mod view;

pub use app::{handle_event, Event, FilterState, Session, SortBy, SortOrder, DEFAULT_PER_PAGE};
pub use domain::{Catalog, CatalogError, CatalogItem, Category, CategoryRules, RawItem, Result};
pub use engine::{evaluate, QueryResult};

use ingest::CatalogSource;
use std::collections::BTreeMap;

/// Engine configuration parsed from `key=value` settings.
///
/// # Keys
///
/// ```text
/// per_page=6
/// rules=en
/// rules_file=/etc/vitrine/rules.toml
/// trace_level=debug
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Items per page. Default: 6
    pub per_page: usize,

    /// Built-in category rule set name.
    ///
    /// Options: `en`, `ru`. Ignored if `rules_file` is set.
    pub rules_name: Option<String>,

    /// Path to a custom TOML rule set.
    ///
    /// Takes precedence over `rules_name`. See [`domain::category`] for format.
    pub rules_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            rules_name: None,
            rules_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `per_page`: String → `usize` (falls back to 6 on parse error or 0)
    /// - `rules`: String → `Option<String>`
    /// - `rules_file`: String → `Option<String>`
    /// - `trace_level`: String → `Option<String>`
    ///
    /// Empty values count as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use vitrine::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("per_page".to_string(), "12".to_string());
    /// map.insert("rules".to_string(), "ru".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.per_page, 12);
    /// assert_eq!(config.rules_name.as_deref(), Some("ru"));
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let per_page = config
            .get("per_page")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_PER_PAGE);

        Self {
            per_page,
            rules_name: non_empty("rules"),
            rules_file: non_empty("rules_file"),
            trace_level: non_empty("trace_level"),
        }
    }

    /// Parses `key=value` pairs, ignoring entries without `=`.
    #[must_use]
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let map: BTreeMap<String, String> = pairs
            .into_iter()
            .filter_map(|pair| {
                pair.as_ref()
                    .split_once('=')
                    .map(|(key, value)| (key.trim().to_string(), value.to_string()))
            })
            .collect();
        Self::from_map(&map)
    }
}

/// Resolves the category rules for a configuration.
///
/// Resolution order is rules file, then built-in rule set name, then the
/// default English rules. A file or name that cannot be loaded is logged and
/// replaced by the default rules rather than failing startup.
///
/// # Example
///
/// ```rust
/// use vitrine::{initialize, Config};
///
/// let config = Config {
///     rules_name: Some("ru".to_string()),
///     ..Default::default()
/// };
///
/// assert_eq!(initialize(&config).name, "ru");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> CategoryRules {
    tracing::debug!("initializing vitrine");

    config.rules_file.as_ref().map_or_else(
        || {
            config.rules_name.as_ref().map_or_else(
                CategoryRules::default,
                |rules_name| {
                    CategoryRules::from_name(rules_name).unwrap_or_else(|| {
                        tracing::warn!(rules_name = %rules_name, "unknown rule set, using default");
                        CategoryRules::default()
                    })
                },
            )
        },
        |rules_file| {
            CategoryRules::from_file(rules_file).unwrap_or_else(|e| {
                tracing::warn!(rules_file = %rules_file, error = %e, "failed to load rules from file, using default");
                CategoryRules::default()
            })
        },
    )
}

/// Loads a source and starts a session with the configured rules and page size.
///
/// # Errors
///
/// Returns any error from [`CatalogSource::load`].
pub fn open_session<S: CatalogSource + ?Sized>(source: &S, config: &Config) -> Result<Session> {
    let rules = initialize(config);
    let records = source.load()?;
    let catalog = Catalog::ingest(records, &rules);
    Ok(Session::new(catalog, config.per_page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::MemorySource;

    #[test]
    fn invalid_per_page_falls_back() {
        let config = Config::from_pairs(["per_page=zero"]);
        assert_eq!(config.per_page, DEFAULT_PER_PAGE);
        let config = Config::from_pairs(["per_page=0"]);
        assert_eq!(config.per_page, DEFAULT_PER_PAGE);
    }

    #[test]
    fn pairs_without_separator_are_ignored() {
        let config = Config::from_pairs(["verbose", "trace_level=debug"]);
        assert_eq!(config, Config {
            trace_level: Some("debug".to_string()),
            ..Config::default()
        });
    }

    #[test]
    fn unknown_rule_set_falls_back_to_default() {
        let config = Config::from_pairs(["rules=klingon"]);
        assert_eq!(initialize(&config), CategoryRules::default());
    }

    #[test]
    fn unreadable_rules_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let config = Config {
            rules_file: Some(missing.to_string_lossy().into_owned()),
            rules_name: Some("ru".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config), CategoryRules::default());
    }

    #[test]
    fn open_session_uses_configured_page_size() {
        let source = MemorySource::new(
            (1..=5).map(|i| RawItem::new(format!("Item {i}"), i, 3.0)).collect(),
        );
        let config = Config::from_pairs(["per_page=2"]);
        let mut session = open_session(&source, &config).unwrap();
        let result = session.evaluate();
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.visible_ids(), vec![0, 1]);
        assert_eq!(session.state().price_max(), 5);
    }
}
