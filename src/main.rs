//! Replay driver for the vitrine engine.
//!
//! Loads a catalog, renders the initial page, then replays a file of events
//! one by one, rendering the page after each. Pages are written to stdout as
//! JSON lines; logs go to stderr.
//!
//! # Usage
//!
//! ```text
//! vitrine <catalog.json> <events.jsonl> [key=value ...]
//! ```
//!
//! Settings after the two paths are passed to [`Config::from_pairs`]
//! (`per_page`, `rules`, `rules_file`, `trace_level`).
//!
//! # Events File
//!
//! One JSON event per line. Blank lines and lines starting with `#` are
//! skipped. A line that is not a valid event is logged and skipped; the
//! remaining events are still replayed.
//!
//! ```text
//! # narrow to shoes, cheapest first
//! {"kind": "category_toggled", "category": "footwear", "on": true}
//! {"kind": "sort_changed", "by": "price", "order": "asc"}
//! ```

use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

use vitrine::ingest::JsonFileSource;
use vitrine::observability::init_tracing;
use vitrine::view::{JsonLinesSink, RenderSink};
use vitrine::{handle_event, open_session, Config, Event, Result};

const USAGE: &str = "usage: vitrine <catalog.json> <events.jsonl> [key=value ...]";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [catalog_path, events_path, settings @ ..] = args.as_slice() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let config = Config::from_pairs(settings);
    init_tracing(&config);

    match run(catalog_path, events_path, &config) {
        Ok(replayed) => {
            tracing::info!(replayed, "replay finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "replay failed");
            eprintln!("vitrine: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Replays every event, returning how many were applied.
fn run(catalog_path: &str, events_path: &str, config: &Config) -> Result<usize> {
    let source = JsonFileSource::new(catalog_path);
    let mut session = open_session(&source, config)?;

    let stdout = io::stdout();
    let mut sink = JsonLinesSink::new(stdout.lock());

    sink.render_result(&session.evaluate())?;

    let events = BufReader::new(std::fs::File::open(events_path)?);
    let mut replayed = 0;

    for (index, line) in events.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let event: Event = match serde_json::from_str(line) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, "skipping malformed event");
                continue;
            }
        };

        let result = handle_event(&mut session, &event);
        sink.render_result(&result)?;
        replayed += 1;
    }

    Ok(replayed)
}
