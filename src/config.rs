//! Configuration for the load orchestrator
//!
//! An explicit configuration object is built once per run and passed down;
//! there is no module-level client singleton. Values come from an optional
//! YAML file, overridden by CLI flags and the `QOF_WAREHOUSE` environment
//! variable.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the warehouse database file
pub const WAREHOUSE_ENV: &str = "QOF_WAREHOUSE";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete loader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Root directory holding per-year extract directories
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Warehouse connection and naming
    #[serde(default)]
    pub warehouse: WarehouseConfig,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            warehouse: WarehouseConfig::default(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

// ============================================================================
// Warehouse Config
// ============================================================================

/// Warehouse connection and target naming
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseConfig {
    /// Database file for the warehouse engine; an ephemeral in-memory
    /// database is used when unset
    #[serde(default)]
    pub database: Option<PathBuf>,

    /// Dataset (schema) holding the target tables
    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// Target table for wide achievement records
    #[serde(default = "default_achievement_table")]
    pub achievement_table: String,

    /// Target table for prevalence records
    #[serde(default = "default_prevalence_table")]
    pub prevalence_table: String,
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            database: None,
            dataset: default_dataset(),
            achievement_table: default_achievement_table(),
            prevalence_table: default_prevalence_table(),
        }
    }
}

fn default_dataset() -> String {
    "qof".to_string()
}

fn default_achievement_table() -> String {
    "achievement".to_string()
}

fn default_prevalence_table() -> String {
    "prevalence".to_string()
}

impl ImportConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Apply the `QOF_WAREHOUSE` override for the warehouse database file
    pub fn apply_env(&mut self) {
        if let Ok(path) = std::env::var(WAREHOUSE_ENV) {
            if !path.is_empty() {
                self.warehouse.database = Some(PathBuf::from(path));
            }
        }
    }
}
