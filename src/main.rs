use active_cookie::{analyze_cookie_log, print_analysis_results, utils, Args};
use anyhow::Result;
use clap::Parser;
use tracing::error;

fn run(args: &Args) -> Result<()> {
    utils::validate_args(args)?;
    let result = analyze_cookie_log(args)?;
    print_analysis_results(&result)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    if let Err(e) = run(&args) {
        error!(action = "fail", component = "main", error = %e, "Analysis failed");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
