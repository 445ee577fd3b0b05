//! The load orchestrator
//!
//! Composes ingest, transform, staging, and the warehouse for one year's
//! import, in a fixed order: resolve inputs, create dataset and tables,
//! duplicate-year guard, achievement load, prevalence load. Any failure
//! aborts the whole run; there is no partial-success state and no retry.

use crate::config::ImportConfig;
use crate::error::{Error, Result};
use crate::ingest::{self, AchievementReader};
use crate::schema::{ACHIEVEMENT_SCHEMA, PREVALENCE_SCHEMA};
use crate::stage::StagedCsv;
use crate::transform;
use crate::warehouse::Warehouse;
use std::path::Path;


/// Row counts submitted for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub achievement_rows: u64,
    pub prevalence_rows: u64,
}

/// Import one year's extracts into the warehouse.
///
/// Errors out before any load submission when either target table already
/// holds rows for `year`.
pub fn run(config: &ImportConfig, warehouse: &dyn Warehouse, year: &str) -> Result<ImportReport> {
    validate_year(year)?;

    let paths = ingest::resolve_year_paths(&config.data_dir, year)?;
    tracing::info!(
        achievement = %paths.achievement.display(),
        prevalence = %paths.prevalence.display(),
        "resolved input files"
    );

    let names = &config.warehouse;
    warehouse.ensure_dataset(&names.dataset)?;
    warehouse.ensure_table(&names.dataset, &names.achievement_table, &ACHIEVEMENT_SCHEMA)?;
    warehouse.ensure_table(&names.dataset, &names.prevalence_table, &PREVALENCE_SCHEMA)?;

    guard_year_absent(warehouse, &names.dataset, &names.achievement_table, year)?;
    guard_year_absent(warehouse, &names.dataset, &names.prevalence_table, year)?;

    let achievement_rows = load_achievement(config, warehouse, &paths.achievement, year)?;
    let prevalence_rows = load_prevalence(config, warehouse, &paths.prevalence, year)?;

    Ok(ImportReport {
        achievement_rows,
        prevalence_rows,
    })
}

/// The year is stamped onto every row and interpolated into the guard
/// query, so only plain identifiers are accepted.
fn validate_year(year: &str) -> Result<()> {
    let valid = !year.is_empty()
        && year
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidYear {
            year: year.to_string(),
            message: "expected a non-empty identifier of letters, digits, '_' or '-'".to_string(),
        })
    }
}

fn guard_year_absent(
    warehouse: &dyn Warehouse,
    dataset: &str,
    table: &str,
    year: &str,
) -> Result<()> {
    let sql = format!("SELECT COUNT(*) FROM {dataset}.{table} WHERE year = '{year}'");
    let existing = warehouse.query_scalar(&sql)?;
    if existing > 0 {
        return Err(Error::already_loaded(table, year));
    }
    Ok(())
}

fn load_achievement(
    config: &ImportConfig,
    warehouse: &dyn Warehouse,
    path: &Path,
    year: &str,
) -> Result<u64> {
    let reader = AchievementReader::open(path)?;
    let records = transform::pivot(year, reader);
    let staged = StagedCsv::write(records.map(|r| r.map(|record| record.to_fields())))?;
    tracing::info!(rows = staged.rows(), "pivoted achievement records");

    let mut data = staged.reopen()?;
    let loaded = warehouse.load_table(
        &mut data,
        &config.warehouse.dataset,
        &config.warehouse.achievement_table,
        &ACHIEVEMENT_SCHEMA,
    )?;
    tracing::info!(
        rows = loaded,
        table = %config.warehouse.achievement_table,
        "loaded achievement data"
    );
    Ok(loaded)
}

fn load_prevalence(
    config: &ImportConfig,
    warehouse: &dyn Warehouse,
    path: &Path,
    year: &str,
) -> Result<u64> {
    let rows = ingest::prevalence_rows(path)?;
    let staged = StagedCsv::write(transform::prepend_year(year, rows))?;
    tracing::info!(rows = staged.rows(), "reshaped prevalence rows");

    let mut data = staged.reopen()?;
    let loaded = warehouse.load_table(
        &mut data,
        &config.warehouse.dataset,
        &config.warehouse.prevalence_table,
        &PREVALENCE_SCHEMA,
    )?;
    tracing::info!(
        rows = loaded,
        table = %config.warehouse.prevalence_table,
        "loaded prevalence data"
    );
    Ok(loaded)
}
