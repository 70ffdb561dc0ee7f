//! Seed rows as conflict-tolerant `INSERT`s
//!
//! Rows are only rendered, never executed. `ON CONFLICT DO NOTHING` keeps
//! re-runs quiet for rows that collide with a primary key or unique index;
//! tables without either will receive duplicates on every run.

use pgspec_core::{EngineResult, format_sql_value};
use pgspec_ir::{SeedRow, TableSpec};

use super::{qualified_name, quoted_list};

/// Render one seed row, keeping the row's key order.
pub fn insert_sql(schema: &str, table: &TableSpec, row: &SeedRow) -> EngineResult<String> {
    let target = qualified_name(schema, &table.name)?;

    let keys: Vec<&str> = row.keys().map(String::as_str).collect();
    let columns = quoted_list(&keys)?;
    let values: Vec<String> = row.values().map(format_sql_value).collect();

    Ok(format!(
        "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT DO NOTHING;",
        target,
        columns,
        values.join(", ")
    ))
}
