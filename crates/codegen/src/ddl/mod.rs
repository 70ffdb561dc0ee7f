//! # DDL Generation
//!
//! This module renders a [`SchemaSpec`] into an ordered list of SQL
//! statements that can be applied to the same database any number of times.
//!
//! ## Statement Order
//!
//! ```text
//! CREATE SCHEMA IF NOT EXISTS
//! for each table (input order):
//!     CREATE TABLE IF NOT EXISTS          (columns + PRIMARY KEY)
//!     DO $$ ... ADD CONSTRAINT ... $$     (one guard per foreign key)
//!     CREATE [UNIQUE] INDEX IF NOT EXISTS (declared indexes)
//!     CREATE UNIQUE INDEX IF NOT EXISTS   (columns flagged unique)
//!     INSERT ... ON CONFLICT DO NOTHING   (seed rows, optional)
//! ```
//!
//! Every identifier is validated right before it is rendered. The first
//! failure aborts the whole render; callers never see a partial script.

pub mod foreign_key;
pub mod index;
pub mod seed;
pub mod table;

use pgspec_core::{EngineResult, quote_identifier, validate_identifier};
use pgspec_ir::{SchemaSpec, TableSpec};

/// Render the schema statement plus every table's statements, in order.
pub fn render_statements(spec: &SchemaSpec, include_seed: bool) -> EngineResult<Vec<String>> {
    let mut statements = Vec::new();

    statements.push(create_schema_sql(&spec.schema)?);

    for table in &spec.tables {
        statements.extend(table_statements(&spec.schema, table, include_seed)?);
    }

    Ok(statements)
}

/// `CREATE SCHEMA IF NOT EXISTS "<schema>";`
pub fn create_schema_sql(schema: &str) -> EngineResult<String> {
    validate_identifier(schema)?;
    Ok(format!(
        "CREATE SCHEMA IF NOT EXISTS {};",
        quote_identifier(schema)
    ))
}

/// All statements belonging to one table, in emission order
pub fn table_statements(
    schema: &str,
    table: &TableSpec,
    include_seed: bool,
) -> EngineResult<Vec<String>> {
    validate_identifier(&table.name)?;

    let mut statements = vec![table::create_table_sql(schema, table)?];

    for (position, fk) in table.foreign_keys.iter().enumerate() {
        statements.push(foreign_key::foreign_key_sql(schema, table, position, fk)?);
    }

    for idx in &table.indexes {
        statements.push(index::index_sql(schema, table, idx)?);
    }

    for column in table.unique_columns() {
        statements.push(index::unique_column_index_sql(schema, table, &column.name)?);
    }

    if include_seed {
        for row in &table.seed {
            statements.push(seed::insert_sql(schema, table, row)?);
        }
    }

    tracing::debug!(
        table = %table.name,
        statements = statements.len(),
        "Rendered table"
    );

    Ok(statements)
}

// ============================================================================
// Helpers
// ============================================================================

/// `"<schema>"."<name>"`, both parts validated
pub(crate) fn qualified_name(schema: &str, name: &str) -> EngineResult<String> {
    validate_identifier(schema)?;
    validate_identifier(name)?;
    Ok(format!(
        "{}.{}",
        quote_identifier(schema),
        quote_identifier(name)
    ))
}

/// `"a", "b", "c"`, every name validated
pub(crate) fn quoted_list<S: AsRef<str>>(names: &[S]) -> EngineResult<String> {
    let mut quoted = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        validate_identifier(name)?;
        quoted.push(quote_identifier(name));
    }
    Ok(quoted.join(", "))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pgspec_core::EngineError;
    use pgspec_ir::{ColumnSpec, ForeignKeySpec, IndexSpec};

    fn users() -> TableSpec {
        TableSpec::new("users")
            .with_column(ColumnSpec::new("id", "uuid").not_null())
            .with_column(ColumnSpec::new("email", "string").unique())
            .with_column(ColumnSpec::new("org_id", "uuid"))
            .with_primary_key(["id"])
            .with_foreign_key(ForeignKeySpec::new(["org_id"], "orgs", ["id"]))
            .with_index(IndexSpec::new(["org_id"]))
    }

    #[test]
    fn test_create_schema_sql() {
        assert_eq!(
            create_schema_sql("acme").unwrap(),
            "CREATE SCHEMA IF NOT EXISTS \"acme\";"
        );
        assert!(create_schema_sql("").is_err());
    }

    #[test]
    fn test_table_statement_order() {
        let statements = table_statements("acme", &users(), true).unwrap();
        assert_eq!(statements.len(), 4);
        assert!(statements[0].starts_with("CREATE TABLE IF NOT EXISTS"));
        assert!(statements[1].starts_with("DO $$"));
        assert!(statements[2].starts_with("CREATE INDEX IF NOT EXISTS \"users_org_id_idx\""));
        assert!(statements[3].starts_with("CREATE UNIQUE INDEX IF NOT EXISTS \"users_email_uniq_idx\""));
    }

    #[test]
    fn test_render_statements_aborts_on_bad_table() {
        let spec = SchemaSpec::new("acme")
            .with_table(users())
            .with_table(TableSpec::new("x".repeat(70)).with_column(ColumnSpec::new("id", "int")));

        let err = render_statements(&spec, true).unwrap_err();
        assert!(matches!(err, EngineError::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_quoted_list() {
        assert_eq!(quoted_list(&["a", "b"]).unwrap(), "\"a\", \"b\"");
        assert!(quoted_list(&["a", ""]).is_err());
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(
            qualified_name("acme", "users").unwrap(),
            "\"acme\".\"users\""
        );
        assert!(qualified_name("acme", &"t".repeat(64)).is_err());
    }
}
