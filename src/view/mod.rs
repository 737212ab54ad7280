//! Render sink seam.
//!
//! The engine exposes structured data only. A [`RenderSink`] receives a
//! [`PageView`] after every evaluation and owns all presentation concerns.
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready page and pagination types
//! - [`json_sink`]: Sink writing JSON lines

pub mod json_sink;
pub mod viewmodel;

pub use json_sink::JsonLinesSink;
pub use viewmodel::{PageButton, PageView};

use crate::domain::Result;
use crate::engine::QueryResult;

/// Consumer of rendered pages.
pub trait RenderSink {
    /// Presents one page.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot present the view; the session
    /// state is unaffected.
    fn render(&mut self, view: &PageView) -> Result<()>;

    /// Builds the view model for `result` and presents it.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`RenderSink::render`].
    fn render_result(&mut self, result: &QueryResult) -> Result<()> {
        self.render(&PageView::from_result(result))
    }
}
