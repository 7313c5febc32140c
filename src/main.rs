use std::process::ExitCode;

use clap::Parser;
use news_reports::argument_parsing::Args;
use news_reports::{Database, Report, menu, reports};
use tokio::io::{self, BufReader};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let db = match Database::from_args(&args) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout();
    let result = match args.report.and_then(Report::from_number) {
        Some(report) => reports::run_report(&db, report, &mut stdout).await,
        None => menu::run(&db, &mut BufReader::new(io::stdin()), &mut stdout).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_fatal() {
                error!("{e}");
                eprintln!("{e}");
            }
            ExitCode::FAILURE
        }
    }
}
