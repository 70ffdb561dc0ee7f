//! `CREATE INDEX` rendering for declared indexes and unique columns

use pgspec_core::{EngineResult, quote_identifier, validate_identifier};
use pgspec_ir::{IndexSpec, TableSpec};

use super::{qualified_name, quoted_list};

/// Render a declared index. The name is explicit or
/// `<table>_<col1>_..._<coln>_idx`.
pub fn index_sql(schema: &str, table: &TableSpec, index: &IndexSpec) -> EngineResult<String> {
    let name = index.resolved_name(&table.name);
    create_index(schema, table, &name, &index.columns, index.unique)
}

/// Render the single-column unique index for a column flagged `unique`,
/// named `<table>_<column>_uniq_idx`.
pub fn unique_column_index_sql(
    schema: &str,
    table: &TableSpec,
    column: &str,
) -> EngineResult<String> {
    let name = table.unique_index_name(column);
    create_index(schema, table, &name, &[column], true)
}

fn create_index<S: AsRef<str>>(
    schema: &str,
    table: &TableSpec,
    name: &str,
    columns: &[S],
    unique: bool,
) -> EngineResult<String> {
    validate_identifier(name)?;
    let target = qualified_name(schema, &table.name)?;
    let columns = quoted_list(columns)?;
    let unique = if unique { "UNIQUE " } else { "" };

    Ok(format!(
        "CREATE {}INDEX IF NOT EXISTS {} ON {} ({});",
        unique,
        quote_identifier(name),
        target,
        columns
    ))
}
