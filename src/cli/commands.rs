//! CLI arguments

use clap::Parser;
use std::path::PathBuf;

/// QOF annual CSV import
#[derive(Parser, Debug)]
#[command(name = "qof-loader")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Year of the extracts to import (e.g. 2020 or 2021-22)
    pub year: String,

    /// Configuration file (YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Root directory holding per-year extract directories
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Warehouse database file (defaults to $QOF_WAREHOUSE, then in-memory)
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
