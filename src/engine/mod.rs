//! Query engine deriving the visible page from a catalog and a filter state.
//!
//! The engine is a single function, [`evaluate`], over borrowed inputs. It
//! holds no state of its own, so evaluating twice with the same catalog and
//! the same filter state yields the same [`QueryResult`].
//!
//! # Modules
//!
//! - [`pipeline`]: Filter, sort and paginate stages
//! - [`result`]: The evaluated page handed to render sinks

pub mod pipeline;
pub mod result;

pub use pipeline::evaluate;
pub use result::QueryResult;
