//! Ingestion source abstraction.
//!
//! This module defines the [`CatalogSource`] trait that abstracts over where
//! the session's item records come from. The engine never sees a source; it
//! only sees the [`Catalog`](crate::Catalog) built from the records a source
//! returns.

use crate::domain::{RawItem, Result};

/// Supplier of the ordered item records for a session.
///
/// Implementations are read once at session start. Record order is
/// significant: it becomes the catalog's ingestion order and the sort
/// tie-break.
///
/// # Implementations
///
/// - [`JsonFileSource`](super::JsonFileSource): JSON array on disk
/// - [`MemorySource`]: records already in memory
///
/// # Examples
///
/// ```
/// use vitrine::ingest::{CatalogSource, MemorySource};
/// use vitrine::RawItem;
///
/// let source = MemorySource::new(vec![RawItem::new("Cap", 20, 4.1)]);
/// assert_eq!(source.load()?.len(), 1);
/// # Ok::<(), vitrine::CatalogError>(())
/// ```
pub trait CatalogSource {
    /// Returns every record in ingestion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read or decoded.
    fn load(&self) -> Result<Vec<RawItem>>;
}

/// Records held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<RawItem>,
}

impl MemorySource {
    #[must_use]
    pub const fn new(records: Vec<RawItem>) -> Self {
        Self { records }
    }
}

impl CatalogSource for MemorySource {
    fn load(&self) -> Result<Vec<RawItem>> {
        Ok(self.records.clone())
    }
}
