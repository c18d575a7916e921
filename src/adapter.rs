use std::time::Instant;
use tracing::{debug, info, warn};

use crate::bucket::DateBuckets;
use crate::record::LogRecord;

#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub buckets: DateBuckets,
    pub records: usize,
    pub dropped: usize,
}

/// Turns the raw content of one log file into date buckets.
pub trait FormatAdapter {
    fn name(&self) -> &'static str;

    fn parse_file_content(&self, content: &str) -> ParseOutcome;
}

/// `cookie,timestamp` text with a header line.
#[derive(Debug, Default)]
pub struct CsvLogAdapter;

impl FormatAdapter for CsvLogAdapter {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn parse_file_content(&self, content: &str) -> ParseOutcome {
        let start_time = Instant::now();
        let mut outcome = ParseOutcome::default();

        // Line 0 is the header, whatever it contains
        for (line_num, line) in content.trim().lines().enumerate().skip(1) {
            match LogRecord::parse_line(line) {
                Some(record) => {
                    outcome.buckets.push(record);
                    outcome.records += 1;
                }
                None => {
                    debug!(action = "drop", component = "csv_adapter", line_number = line_num + 1, "Malformed record");
                    outcome.dropped += 1;
                }
            }
        }

        info!(
            action = "complete",
            component = "csv_adapter",
            records = outcome.records,
            dropped = outcome.dropped,
            dates = outcome.buckets.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Parsed cookie log"
        );

        outcome
    }
}

/// Fallback for formats nobody handles yet. Contributes nothing.
#[derive(Debug, Default)]
pub struct NoopAdapter;

impl FormatAdapter for NoopAdapter {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn parse_file_content(&self, _content: &str) -> ParseOutcome {
        ParseOutcome::default()
    }
}

type AdapterFactory = fn() -> Box<dyn FormatAdapter>;

fn csv_adapter() -> Box<dyn FormatAdapter> {
    Box::new(CsvLogAdapter)
}

const ADAPTERS: &[(&str, AdapterFactory)] = &[("csv", csv_adapter)];

/// Pick an adapter by file extension (case-insensitive). Unknown extensions
/// get the no-op adapter rather than an error.
pub fn adapter_for_extension(extension: Option<&str>) -> Box<dyn FormatAdapter> {
    let extension = extension.map(str::to_lowercase);

    let factory = extension.as_deref().and_then(|ext| {
        ADAPTERS
            .iter()
            .find(|(key, _)| *key == ext)
            .map(|(_, factory)| *factory)
    });

    match factory {
        Some(factory) => factory(),
        None => {
            warn!(action = "select", component = "format_adapter", extension = ?extension, "Unsupported file extension, no records will be read");
            Box::new(NoopAdapter)
        }
    }
}
