//! Warehouse collaborator
//!
//! The orchestrator talks to the warehouse through the [`Warehouse`] trait:
//! a scalar count query, dataset/table creation-if-absent, and a bulk load
//! of a binary CSV stream against an explicit column schema. One production
//! implementation is provided, backed by DuckDB.

mod engine;

pub use engine::DuckDbWarehouse;

#[cfg(test)]
mod tests;

use crate::error::Result;
use crate::schema::TableSchema;
use std::io::Read;

/// Operations the load orchestrator needs from the warehouse
pub trait Warehouse {
    /// Run a count-style query returning a single integer scalar.
    fn query_scalar(&self, sql: &str) -> Result<i64>;

    /// Create the dataset (schema/namespace) if it does not already exist.
    fn ensure_dataset(&self, dataset: &str) -> Result<()>;

    /// Create `dataset.table` with the given columns if it does not already
    /// exist.
    fn ensure_table(&self, dataset: &str, table: &str, schema: &TableSchema) -> Result<()>;

    /// Bulk-load a binary headerless-CSV stream into `dataset.table`,
    /// mapping fields onto `schema` positionally. Returns rows loaded.
    fn load_table(
        &self,
        data: &mut dyn Read,
        dataset: &str,
        table: &str,
        schema: &TableSchema,
    ) -> Result<u64>;
}
