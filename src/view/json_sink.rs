//! JSON-lines render sink.
//!
//! Writes each [`PageView`] as one compact JSON document followed by a
//! newline, flushing after every render so a consumer reading the stream sees
//! each page as soon as it is produced.

use super::viewmodel::PageView;
use super::RenderSink;
use crate::domain::error::{CatalogError, Result};
use std::io::Write;

/// Render sink writing JSON lines to any writer.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderSink for JsonLinesSink<W> {
    fn render(&mut self, view: &PageView) -> Result<()> {
        let json = serde_json::to_string(view)
            .map_err(|e| CatalogError::Render(format!("failed to serialize view: {e}")))?;

        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;

        tracing::trace!(bytes = json.len(), "view rendered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::QueryResult;

    #[test]
    fn writes_one_line_per_render() {
        let mut sink = JsonLinesSink::new(Vec::new());
        let view = PageView::from_result(&QueryResult {
            visible_items: vec![],
            total_count: 0,
            total_pages: 1,
            current_page: 1,
        });

        sink.render(&view).unwrap();
        sink.render(&view).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let decoded: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(decoded["empty"], serde_json::Value::Bool(true));
        assert_eq!(decoded["current_page"], serde_json::json!(1));
    }
}
