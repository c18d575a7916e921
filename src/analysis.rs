use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use crate::{adapter, rank, stats::AnalysisResult, Args};

pub fn read_log_file(path: &Path) -> Result<String> {
    let start_time = Instant::now();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read cookie log {:?}", path))?;

    info!(
        action = "read",
        component = "log_file",
        file_path = ?path,
        bytes = content.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Read cookie log"
    );
    Ok(content)
}

/// Parse `content` with the adapter for `extension` and rank cookies on `date`.
pub fn analyze_content(content: &str, extension: Option<&str>, date: &str) -> AnalysisResult {
    let adapter = adapter::adapter_for_extension(extension);
    info!(action = "select", component = "format_adapter", adapter = adapter.name(), "Selected format adapter");

    let outcome = adapter.parse_file_content(content);

    if let Some(cookies) = outcome.buckets.get(date) {
        for (cookie, count) in rank::count_occurrences(cookies) {
            debug!(action = "count", component = "ranker", cookie, count, "Cookie occurrences");
        }
    }

    let winners = rank::most_active(&outcome.buckets, date);
    info!(
        action = "complete",
        component = "ranker",
        date,
        winners = winners.as_ref().map_or(0, Vec::len),
        "Ranking completed"
    );

    AnalysisResult {
        date: date.to_string(),
        winners,
        records: outcome.records,
        dropped: outcome.dropped,
    }
}

pub fn analyze_cookie_log(args: &Args) -> Result<AnalysisResult> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "analysis", file_path = ?args.file, date = %args.date, "Starting cookie log analysis");

    let content = read_log_file(&args.file)?;
    let extension = args.file.extension().and_then(|ext| ext.to_str());
    let result = analyze_content(&content, extension, &args.date);

    info!(
        action = "complete",
        component = "analysis",
        records = result.records,
        dropped = result.dropped,
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );

    Ok(result)
}

pub fn write_analysis_results<W: Write>(result: &AnalysisResult, out: &mut W) -> io::Result<()> {
    match &result.winners {
        Some(winners) => {
            for cookie in winners {
                writeln!(out, "{}", cookie)?;
            }
        }
        None => writeln!(
            out,
            "No cookies found for date {}. Check the date (expected YYYY-MM-DD) and the log file.",
            result.date
        )?,
    }
    Ok(())
}

pub fn print_analysis_results(result: &AnalysisResult) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_analysis_results(result, &mut out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SAMPLE: &str = "cookie,timestamp
AtY0laUfhglK3lC7,2018-12-09T14:19:00+00:00
SAZuXPGUrfbcn5UA,2018-12-09T10:13:00+00:00
5UAVanZf6UtGyKVS,2018-12-09T07:25:00+00:00
AtY0laUfhglK3lC7,2018-12-09T06:19:00+00:00
SAZuXPGUrfbcn5UA,2018-12-08T22:03:00+00:00
4sMM2LxV07bPJzwf,2018-12-08T21:30:00+00:00
fbcn5UAVanZf6UtG,2018-12-08T09:30:00+00:00
4sMM2LxV07bPJzwf,2018-12-07T23:30:00+00:00
";

    fn render(result: &AnalysisResult) -> String {
        let mut out = Vec::new();
        write_analysis_results(result, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn write_log(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_most_active_cookie() {
        let result = analyze_content(SAMPLE, Some("csv"), "2018-12-09");
        assert_eq!(result.winners, Some(vec!["AtY0laUfhglK3lC7".to_string()]));
        assert_eq!(result.records, 8);
        assert_eq!(render(&result), "AtY0laUfhglK3lC7\n");
    }

    #[test]
    fn test_tied_cookies_all_printed() {
        let result = analyze_content(SAMPLE, Some("csv"), "2018-12-08");
        assert_eq!(
            render(&result),
            "SAZuXPGUrfbcn5UA\n4sMM2LxV07bPJzwf\nfbcn5UAVanZf6UtG\n"
        );
    }

    #[test]
    fn test_no_data_message() {
        let result = analyze_content(SAMPLE, Some("csv"), "2099-01-01");
        assert_eq!(result.winners, None);
        let output = render(&result);
        assert!(output.starts_with("No cookies found for date 2099-01-01"));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_unknown_extension_has_no_data() {
        let result = analyze_content(SAMPLE, Some("log"), "2018-12-09");
        assert_eq!(result.winners, None);
        assert_eq!(result.records, 0);
    }

    #[test]
    fn test_idempotent() {
        let first = analyze_content(SAMPLE, Some("csv"), "2018-12-08");
        let second = analyze_content(SAMPLE, Some("csv"), "2018-12-08");
        assert_eq!(first, second);
    }

    #[test]
    fn test_analyze_cookie_log_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(&dir, "cookie_log.CSV", SAMPLE);
        let args = Args {
            file: path,
            date: "2018-12-07".to_string(),
            verbose: false,
        };

        let result = analyze_cookie_log(&args).unwrap();
        assert_eq!(result.winners, Some(vec!["4sMM2LxV07bPJzwf".to_string()]));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args {
            file: dir.path().join("missing.csv"),
            date: "2018-12-09".to_string(),
            verbose: false,
        };

        let err = analyze_cookie_log(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("missing.csv"));
    }
}
