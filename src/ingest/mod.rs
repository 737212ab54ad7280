//! Ingestion adapters producing the session's item records.
//!
//! # Modules
//!
//! - `source`: [`CatalogSource`] trait and the in-memory source
//! - `json`: JSON file source
//! - `text`: Record construction from scraped card text

pub mod json;
pub mod source;
pub mod text;

pub use json::JsonFileSource;
pub use source::{CatalogSource, MemorySource};
