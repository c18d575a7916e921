use chrono::NaiveDate;
use time::macros::format_description;
use tracing::warn;
use tracing_subscriber::{fmt::time::LocalTime, EnvFilter};

/// Logs go to stderr; stdout is reserved for cookie output. `RUST_LOG` wins
/// over the verbose flag when set.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_writer(std::io::stderr)
        .init();
}

pub fn is_canonical_date(date: &str) -> bool {
    date.len() == 10 && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if args.date.trim().is_empty() {
        anyhow::bail!("--date must not be empty");
    }

    // Dates are still matched verbatim, this only helps spot typos
    if !is_canonical_date(&args.date) {
        warn!(action = "validate", component = "args", date = %args.date, "Date is not in YYYY-MM-DD form and may not match any log entry");
    }

    Ok(())
}
