pub mod adapter;
pub mod analysis;
pub mod args;
pub mod bucket;
pub mod rank;
pub mod record;
pub mod stats;
pub mod utils;

pub use adapter::{adapter_for_extension, CsvLogAdapter, FormatAdapter, NoopAdapter, ParseOutcome};
pub use analysis::{analyze_content, analyze_cookie_log, print_analysis_results};
pub use args::Args;
pub use bucket::DateBuckets;
pub use rank::most_active;
pub use record::LogRecord;
pub use stats::AnalysisResult;
