//! Input path resolution and CSV readers
//!
//! Extracts live under a fixed per-year layout:
//! `<data_dir>/<year>/achievement.csv` and `<data_dir>/<year>/prevalence.csv`.
//! Both must exist before any warehouse interaction happens.

use crate::error::{Error, Result};
use crate::transform::MeasurementRecord;
use csv::StringRecord;
use std::fs::File;
use std::path::{Path, PathBuf};


/// File name of the achievement extract inside a year directory
pub const ACHIEVEMENT_FILE: &str = "achievement.csv";

/// File name of the prevalence extract inside a year directory
pub const PREVALENCE_FILE: &str = "prevalence.csv";

/// Resolved input paths for one year's extracts
#[derive(Debug, Clone)]
pub struct YearPaths {
    pub achievement: PathBuf,
    pub prevalence: PathBuf,
}

/// Resolve both extract paths for `year`, failing if either file is missing.
pub fn resolve_year_paths(data_dir: &Path, year: &str) -> Result<YearPaths> {
    let year_dir = data_dir.join(year);
    let achievement = year_dir.join(ACHIEVEMENT_FILE);
    let prevalence = year_dir.join(PREVALENCE_FILE);

    for path in [&achievement, &prevalence] {
        if !path.exists() {
            return Err(Error::input_file_missing(path.display().to_string()));
        }
    }

    Ok(YearPaths {
        achievement,
        prevalence,
    })
}

// ============================================================================
// Achievement Reader
// ============================================================================

/// Streaming reader over the achievement extract, yielding one flat
/// measurement record per row
pub struct AchievementReader {
    records: csv::StringRecordsIntoIter<File>,
    practice_idx: usize,
    indicator_idx: usize,
    measure_idx: usize,
    value_idx: usize,
}

impl AchievementReader {
    /// Open the extract and locate the expected columns by header name.
    pub fn open(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
        let headers = reader.headers()?.clone();

        let practice_idx = header_index(&headers, "PRACTICE_CODE", path)?;
        let indicator_idx = header_index(&headers, "INDICATOR_CODE", path)?;
        let measure_idx = header_index(&headers, "MEASURE", path)?;
        let value_idx = header_index(&headers, "VALUE", path)?;

        Ok(Self {
            records: reader.into_records(),
            practice_idx,
            indicator_idx,
            measure_idx,
            value_idx,
        })
    }
}

impl Iterator for AchievementReader {
    type Item = Result<MeasurementRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };

        let field = |idx: usize| record.get(idx).unwrap_or("").to_string();
        Some(Ok(MeasurementRecord {
            practice_code: field(self.practice_idx),
            indicator_code: field(self.indicator_idx),
            measure: field(self.measure_idx),
            value: field(self.value_idx),
        }))
    }
}

fn header_index(headers: &StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| Error::MissingColumn {
            column: name.to_string(),
            path: path.display().to_string(),
        })
}

// ============================================================================
// Prevalence Reader
// ============================================================================

/// Stream the prevalence extract's data rows verbatim, header consumed.
///
/// The reader is flexible about field counts: rows pass through exactly as
/// they appear in the file.
pub fn prevalence_rows(path: &Path) -> Result<impl Iterator<Item = Result<Vec<String>>>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    Ok(reader.into_records().map(|record| {
        record
            .map(|r| r.iter().map(str::to_string).collect())
            .map_err(Error::from)
    }))
}
