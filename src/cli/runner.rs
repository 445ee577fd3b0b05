//! CLI runner - builds configuration and executes the import

use crate::cli::commands::Cli;
use crate::config::ImportConfig;
use crate::error::Result;
use crate::import::{self, ImportReport};
use crate::warehouse::DuckDbWarehouse;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the import for the requested year
    pub fn run(&self) -> Result<ImportReport> {
        let config = self.build_config()?;
        let warehouse = DuckDbWarehouse::open(&config.warehouse)?;
        import::run(&config, &warehouse, &self.cli.year)
    }

    /// Assemble configuration: file values, then environment, then flags
    fn build_config(&self) -> Result<ImportConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ImportConfig::from_file(path)?,
            None => ImportConfig::default(),
        };
        config.apply_env();

        if let Some(data_dir) = &self.cli.data_dir {
            config.data_dir = data_dir.clone();
        }
        if let Some(database) = &self.cli.database {
            config.warehouse.database = Some(database.clone());
        }

        Ok(config)
    }
}
