//! Intermediate on-disk CSV staging
//!
//! Transformed rows are written to a temporary CSV, flushed, and reopened
//! read-only for the bulk load. The temp file is removed when the handle
//! drops, so cleanup happens on every exit path, upload failure included.

use crate::error::Result;
use std::fs::File;
use std::path::Path;
use tempfile::NamedTempFile;


/// One staged dataset: a fully-written headerless CSV on disk
pub struct StagedCsv {
    file: NamedTempFile,
    rows: u64,
}

impl StagedCsv {
    /// Write every row to a fresh temp file. Rows are field vectors in
    /// target-schema column order; no header row is written.
    ///
    /// The input is consumed eagerly: an error from the row stream aborts
    /// the staging (and the partially-written temp file is removed on drop).
    pub fn write<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<R>>,
        R: IntoIterator<Item = String>,
    {
        let mut file = NamedTempFile::new()?;
        let mut count = 0u64;
        {
            // Flexible so prevalence rows pass through with whatever field
            // count they arrived with.
            let mut writer = csv::WriterBuilder::new()
                .flexible(true)
                .from_writer(file.as_file_mut());
            for row in rows {
                writer.write_record(row?)?;
                count += 1;
            }
            writer.flush()?;
        }

        Ok(Self { file, rows: count })
    }

    /// Number of data rows staged
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Location of the staged file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Reopen the staged file for reading in binary mode.
    pub fn reopen(&self) -> Result<File> {
        Ok(self.file.reopen()?)
    }
}
