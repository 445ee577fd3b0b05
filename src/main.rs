// Allow common clippy pedantic lints
#![allow(clippy::needless_pass_by_value)]

//! QOF loader CLI
//!
//! Imports one year's achievement and prevalence extracts. Exits 0 on
//! success, 1 when the duplicate-year guard fires or on any fatal error.

use clap::Parser;
use qof_loader::cli::{Cli, Runner};

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cli.verbose {
                    tracing::Level::DEBUG
                } else {
                    tracing::Level::INFO
                }
                .into(),
            ),
        )
        .init();

    let runner = Runner::new(cli);
    match runner.run() {
        Ok(report) => {
            tracing::info!(
                achievement_rows = report.achievement_rows,
                prevalence_rows = report.prevalence_rows,
                "import complete"
            );
        }
        Err(e) if e.is_duplicate_data() => {
            println!("{e}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
