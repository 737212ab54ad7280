//! Domain layer for vitrine.
//!
//! This module contains the catalog types and the ingestion-time category
//! inference, independent of how items are sourced or rendered.
//!
//! # Organization
//!
//! - [`category`]: Ordered keyword rules for category inference
//! - [`error`]: Error types and result aliases
//! - [`item`]: Catalog item model and the immutable catalog
//! - [`parse`]: Permissive numeric parsing of user and scraped text

pub mod category;
pub mod error;
pub mod item;
pub mod parse;

pub use category::{CategoryRule, CategoryRules};
pub use error::{CatalogError, Result};
pub use item::{Catalog, CatalogItem, Category, RawItem};
