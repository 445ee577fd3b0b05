//! DuckDB-backed warehouse engine
//!
//! Bulk loads go through the engine's CSV reader: the incoming stream is
//! copied to a scratch file and inserted with an explicit column spec, so
//! the target schema is never inferred from the data.

use super::Warehouse;
use crate::config::WarehouseConfig;
use crate::error::{Error, Result};
use crate::schema::TableSchema;
use duckdb::Connection;
use std::io::{self, Read};
use std::path::Path;
use tempfile::NamedTempFile;

/// Warehouse implementation on a DuckDB database
pub struct DuckDbWarehouse {
    conn: Connection,
}

impl DuckDbWarehouse {
    /// Open the warehouse described by `config`. A database path gives a
    /// persistent warehouse; no path gives an ephemeral in-memory one.
    pub fn open(config: &WarehouseConfig) -> Result<Self> {
        let conn = match &config.database {
            Some(path) => Connection::open(path).map_err(|e| {
                Error::warehouse(format!("failed to open database {}: {e}", path.display()))
            })?,
            None => Connection::open_in_memory()
                .map_err(|e| Error::warehouse(format!("failed to open in-memory database: {e}")))?,
        };
        Ok(Self { conn })
    }

    /// Open an ephemeral in-memory warehouse.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::warehouse(format!("failed to open in-memory database: {e}")))?;
        Ok(Self { conn })
    }
}

impl Warehouse for DuckDbWarehouse {
    fn query_scalar(&self, sql: &str) -> Result<i64> {
        let value = self.conn.query_row(sql, [], |row| row.get(0))?;
        Ok(value)
    }

    fn ensure_dataset(&self, dataset: &str) -> Result<()> {
        check_identifier(dataset)?;
        self.conn
            .execute_batch(&format!("CREATE SCHEMA IF NOT EXISTS {dataset};"))?;
        Ok(())
    }

    fn ensure_table(&self, dataset: &str, table: &str, schema: &TableSchema) -> Result<()> {
        check_identifier(dataset)?;
        check_identifier(table)?;
        self.conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {dataset}.{table} ({});",
            schema.ddl_columns()
        ))?;
        Ok(())
    }

    fn load_table(
        &self,
        data: &mut dyn Read,
        dataset: &str,
        table: &str,
        schema: &TableSchema,
    ) -> Result<u64> {
        check_identifier(dataset)?;
        check_identifier(table)?;

        // Scratch copy for the engine's CSV reader; removed on drop.
        let mut scratch = NamedTempFile::new()?;
        io::copy(data, scratch.as_file_mut())?;

        let sql = format!(
            "INSERT INTO {dataset}.{table} SELECT * FROM read_csv('{}', header=false, columns={});",
            sql_escape_path(scratch.path()),
            schema.csv_columns_spec()
        );
        let loaded = self.conn.execute(&sql, [])?;
        Ok(loaded as u64)
    }
}

/// Dataset and table names are interpolated into SQL; only plain
/// identifiers are accepted.
fn check_identifier(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(Error::warehouse(format!("invalid identifier: {name:?}")))
    }
}

fn sql_escape_path(path: &Path) -> String {
    path.to_string_lossy().replace('\'', "''")
}
