//! Fixed warehouse table schemas
//!
//! The two target tables have fixed column layouts. Column order here is the
//! order staged CSV fields are written in, so the bulk load maps fields onto
//! columns positionally.

use once_cell::sync::Lazy;


/// Warehouse column type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Free-text identifier or label
    String,
    /// Whole-number count
    Integer,
    /// Decimal score
    Float,
}

impl ColumnType {
    /// SQL type name understood by the warehouse engine
    pub fn sql_type(self) -> &'static str {
        match self {
            ColumnType::String => "VARCHAR",
            ColumnType::Integer => "BIGINT",
            ColumnType::Float => "DOUBLE",
        }
    }
}

/// A named, typed column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub column_type: ColumnType,
}

fn col(name: &'static str, column_type: ColumnType) -> Column {
    Column { name, column_type }
}

/// Ordered column schema for one target table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    columns: Vec<Column>,
}

impl TableSchema {
    /// Create a schema from an ordered column list
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Columns in load order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in load order
    pub fn field_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    /// Column list for a CREATE TABLE statement,
    /// e.g. `year VARCHAR, register BIGINT`
    pub fn ddl_columns(&self) -> String {
        self.columns
            .iter()
            .map(|c| format!("{} {}", c.name, c.column_type.sql_type()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Column struct for the engine's CSV reader,
    /// e.g. `{'year': 'VARCHAR', 'register': 'BIGINT'}`
    pub fn csv_columns_spec(&self) -> String {
        let entries = self
            .columns
            .iter()
            .map(|c| format!("'{}': '{}'", c.name, c.column_type.sql_type()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{{entries}}}")
    }
}

/// Schema for the wide achievement table
pub static ACHIEVEMENT_SCHEMA: Lazy<TableSchema> = Lazy::new(|| {
    TableSchema::new(vec![
        col("year", ColumnType::String),
        col("practice_id", ColumnType::String),
        col("indicator", ColumnType::String),
        col("achieved_points", ColumnType::Float),
        col("register", ColumnType::Integer),
        col("numerator", ColumnType::Integer),
        col("denominator", ColumnType::Integer),
        col("exceptions", ColumnType::Integer),
    ])
});

/// Schema for the prevalence table
pub static PREVALENCE_SCHEMA: Lazy<TableSchema> = Lazy::new(|| {
    TableSchema::new(vec![
        col("year", ColumnType::String),
        col("practice_id", ColumnType::String),
        col("indicator_group", ColumnType::String),
        col("register", ColumnType::Integer),
        col("patient_list_type", ColumnType::String),
        col("patient_list_size", ColumnType::Integer),
    ])
});
