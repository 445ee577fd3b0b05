// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # QOF Loader
//!
//! One-shot annual import of QOF (Quality and Outcomes Framework) CSV
//! extracts into an analytics warehouse. Run once per year, guarded against
//! duplicate loads.
//!
//! ## Pipeline
//!
//! ```text
//! data/<year>/achievement.csv ─▶ ingest ─▶ pivot ─▶ stage ─▶ warehouse
//! data/<year>/prevalence.csv  ─▶ ingest ─▶ prepend year ─▶ stage ─▶ warehouse
//! ```
//!
//! The achievement extract arrives long/narrow (one row per measure per
//! practice/indicator pair) and is pivoted into one wide row per contiguous
//! (practice, indicator) run. The prevalence extract passes through verbatim
//! with the year prepended. Both datasets are staged to a temporary CSV and
//! bulk-loaded against a fixed column schema.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use qof_loader::config::ImportConfig;
//! use qof_loader::warehouse::DuckDbWarehouse;
//! use qof_loader::{import, Result};
//!
//! fn main() -> Result<()> {
//!     let config = ImportConfig::default();
//!     let warehouse = DuckDbWarehouse::open(&config.warehouse)?;
//!     let report = import::run(&config, &warehouse, "2020")?;
//!     println!("loaded {} achievement rows", report.achievement_rows);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the loader
pub mod error;

/// Configuration for the orchestrator and warehouse
pub mod config;

/// Fixed warehouse table schemas
pub mod schema;

/// Pivot transformer and prevalence reshape
pub mod transform;

/// Input path resolution and CSV readers
pub mod ingest;

/// Intermediate on-disk CSV staging
pub mod stage;

/// Warehouse collaborator trait and DuckDB engine
pub mod warehouse;

/// Load orchestrator
pub mod import;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
