use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "active-cookie",
    about = "Find the most active cookie(s) in a cookie log for a given day",
    version,
    long_about = None
)]
pub struct Args {
    /// Cookie log file to analyze
    #[arg(short, long)]
    pub file: PathBuf,

    /// Date to analyze (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
