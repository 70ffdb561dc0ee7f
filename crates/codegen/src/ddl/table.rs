//! `CREATE TABLE` rendering

use pgspec_core::{EngineResult, quote_identifier, validate_identifier};
use pgspec_ir::{ColumnSpec, TableSpec};

use super::{qualified_name, quoted_list};

/// Render `CREATE TABLE IF NOT EXISTS` with one column definition per line
/// and the primary key as a trailing table constraint.
pub fn create_table_sql(schema: &str, table: &TableSpec) -> EngineResult<String> {
    let target = qualified_name(schema, &table.name)?;

    let mut definitions = Vec::with_capacity(table.columns.len() + 1);
    for column in &table.columns {
        definitions.push(column_definition(column)?);
    }

    if let Some(pk) = &table.primary_key {
        definitions.push(format!("PRIMARY KEY ({})", quoted_list(pk)?));
    }

    Ok(format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {}\n);",
        target,
        definitions.join(",\n  ")
    ))
}

/// `"<name>" <type>[ NOT NULL][ DEFAULT <expr>]`
///
/// The default expression is copied as-is; it is the caller's SQL.
pub fn column_definition(column: &ColumnSpec) -> EngineResult<String> {
    validate_identifier(&column.name)?;

    let mut parts = vec![quote_identifier(&column.name), column.data_type.clone()];

    if !column.nullable {
        parts.push("NOT NULL".to_string());
    }

    if let Some(default) = &column.default {
        parts.push(format!("DEFAULT {}", default));
    }

    Ok(parts.join(" "))
}
