//! Error types for the QOF loader
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the QOF loader
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Invalid year {year:?}: {message}")]
    InvalidYear { year: String, message: String },

    // ============================================================================
    // Input Precondition Errors
    // ============================================================================
    #[error("Input file not found: {path}")]
    InputFileMissing { path: String },

    // ============================================================================
    // Duplicate-Data Guard
    // ============================================================================
    #[error("There is already {table} data for {year}")]
    AlreadyLoaded { table: String, year: String },

    // ============================================================================
    // Malformed-Input Errors
    // ============================================================================
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing expected column '{column}' in {path}")]
    MissingColumn { column: String, path: String },

    #[error("Unknown measure '{measure}' for practice {practice} indicator {indicator}")]
    UnknownMeasure {
        measure: String,
        practice: String,
        indicator: String,
    },

    #[error("Invalid value {value:?} for measure '{measure}': {message}")]
    InvalidValue {
        measure: String,
        value: String,
        message: String,
    },

    // ============================================================================
    // Warehouse Errors
    // ============================================================================
    #[error("Warehouse error: {message}")]
    Warehouse { message: String },

    #[error("DuckDB error: {0}")]
    Duckdb(#[from] duckdb::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a warehouse error
    pub fn warehouse(message: impl Into<String>) -> Self {
        Self::Warehouse {
            message: message.into(),
        }
    }

    /// Create a missing-input-file error
    pub fn input_file_missing(path: impl Into<String>) -> Self {
        Self::InputFileMissing { path: path.into() }
    }

    /// Create a duplicate-data error for one target table
    pub fn already_loaded(table: impl Into<String>, year: impl Into<String>) -> Self {
        Self::AlreadyLoaded {
            table: table.into(),
            year: year.into(),
        }
    }

    /// Check if this error is the duplicate-data guard firing
    pub fn is_duplicate_data(&self) -> bool {
        matches!(self, Error::AlreadyLoaded { .. })
    }
}

/// Result type alias for the QOF loader
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::input_file_missing("data/2020/achievement.csv");
        assert_eq!(
            err.to_string(),
            "Input file not found: data/2020/achievement.csv"
        );

        let err = Error::already_loaded("achievement", "2020");
        assert_eq!(err.to_string(), "There is already achievement data for 2020");
    }

    #[test]
    fn test_is_duplicate_data() {
        assert!(Error::already_loaded("prevalence", "2021").is_duplicate_data());

        assert!(!Error::config("test").is_duplicate_data());
        assert!(!Error::input_file_missing("x.csv").is_duplicate_data());
        assert!(!Error::UnknownMeasure {
            measure: "FOO".to_string(),
            practice: "P1".to_string(),
            indicator: "IND1".to_string(),
        }
        .is_duplicate_data());
    }
}
