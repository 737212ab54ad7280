//! Error types for the vitrine catalog engine.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] for the fallible edges of the crate: loading catalogs, loading
//! category rule sets, parsing configuration and writing rendered views. The
//! filter state and the query engine themselves never fail.

use thiserror::Error;

/// The main error type for vitrine operations.
///
/// Every variant belongs to an adapter boundary (ingestion, rules, config,
/// rendering). Values that reach the engine are already validated.
///
/// # Examples
///
/// ```
/// use vitrine::CatalogError;
///
/// fn validate_rules() -> Result<(), CatalogError> {
///     Err(CatalogError::Rules("rule list is empty".to_string()))
/// }
///
/// assert!(validate_rules().is_err());
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog records could not be decoded.
    ///
    /// Occurs when an ingestion source returns malformed JSON or records with
    /// missing fields.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Category rule set could not be loaded.
    ///
    /// Occurs when a rules file is not valid TOML or names an unknown category.
    #[error("Rules error: {0}")]
    Rules(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A category name did not match any known category.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A render sink failed to present a view.
    #[error("Render error: {0}")]
    Render(String),
}

/// A specialized `Result` type for vitrine operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
