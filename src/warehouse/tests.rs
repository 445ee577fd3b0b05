//! Tests for the DuckDB warehouse engine

use super::*;
use crate::schema::{ACHIEVEMENT_SCHEMA, PREVALENCE_SCHEMA};
use pretty_assertions::assert_eq;
use std::io::Cursor;

fn warehouse_with_tables() -> DuckDbWarehouse {
    let warehouse = DuckDbWarehouse::in_memory().unwrap();
    warehouse.ensure_dataset("qof").unwrap();
    warehouse
        .ensure_table("qof", "achievement", &ACHIEVEMENT_SCHEMA)
        .unwrap();
    warehouse
        .ensure_table("qof", "prevalence", &PREVALENCE_SCHEMA)
        .unwrap();
    warehouse
}

#[test]
fn test_ensure_dataset_and_table_are_idempotent() {
    let warehouse = warehouse_with_tables();
    warehouse.ensure_dataset("qof").unwrap();
    warehouse
        .ensure_table("qof", "achievement", &ACHIEVEMENT_SCHEMA)
        .unwrap();

    let count = warehouse
        .query_scalar("SELECT COUNT(*) FROM qof.achievement")
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn test_load_achievement_stream() {
    let warehouse = warehouse_with_tables();

    let csv = "2020,P1,IND1,9.5,10,8,9,\n2020,P2,IND1,,5,,,\n";
    let mut data = Cursor::new(csv.as_bytes().to_vec());
    let loaded = warehouse
        .load_table(&mut data, "qof", "achievement", &ACHIEVEMENT_SCHEMA)
        .unwrap();
    assert_eq!(loaded, 2);

    let count = warehouse
        .query_scalar("SELECT COUNT(*) FROM qof.achievement WHERE year = '2020'")
        .unwrap();
    assert_eq!(count, 2);

    let register = warehouse
        .query_scalar("SELECT register FROM qof.achievement WHERE practice_id = 'P1'")
        .unwrap();
    assert_eq!(register, 10);
}

#[test]
fn test_empty_fields_load_as_null() {
    let warehouse = warehouse_with_tables();

    let csv = "2020,P2,IND1,,5,,,\n";
    let mut data = Cursor::new(csv.as_bytes().to_vec());
    warehouse
        .load_table(&mut data, "qof", "achievement", &ACHIEVEMENT_SCHEMA)
        .unwrap();

    let nulls = warehouse
        .query_scalar(
            "SELECT COUNT(*) FROM qof.achievement \
             WHERE achieved_points IS NULL AND numerator IS NULL",
        )
        .unwrap();
    assert_eq!(nulls, 1);
}

#[test]
fn test_load_prevalence_stream() {
    let warehouse = warehouse_with_tables();

    let csv = "2020,P1,AF,10,TOTAL,2000\n2020,P2,AF,5,TOTAL,1500\n";
    let mut data = Cursor::new(csv.as_bytes().to_vec());
    let loaded = warehouse
        .load_table(&mut data, "qof", "prevalence", &PREVALENCE_SCHEMA)
        .unwrap();
    assert_eq!(loaded, 2);

    let total = warehouse
        .query_scalar("SELECT CAST(SUM(patient_list_size) AS BIGINT) FROM qof.prevalence")
        .unwrap();
    assert_eq!(total, 3500);
}

#[test]
fn test_query_scalar_rejects_malformed_sql() {
    let warehouse = warehouse_with_tables();
    assert!(warehouse.query_scalar("SELECT nope FROM nowhere").is_err());
}

#[test]
fn test_invalid_identifiers_rejected() {
    let warehouse = DuckDbWarehouse::in_memory().unwrap();

    assert!(warehouse.ensure_dataset("qof; DROP TABLE x").is_err());
    assert!(warehouse.ensure_dataset("").is_err());
    assert!(warehouse
        .ensure_table("qof", "bad-table", &ACHIEVEMENT_SCHEMA)
        .is_err());
}
