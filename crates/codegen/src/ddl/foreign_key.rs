//! Foreign key constraints wrapped in existence guards
//!
//! PostgreSQL has no `ADD CONSTRAINT IF NOT EXISTS`, so each constraint is
//! added from an anonymous `DO` block that first looks the constraint up in
//! `information_schema.table_constraints` by schema, table, name and type.

use pgspec_core::{EngineResult, quote_identifier, quote_literal, validate_identifier};
use pgspec_ir::{ForeignKeySpec, TableSpec};

use super::{qualified_name, quoted_list};

/// Render the guarded `ALTER TABLE ... ADD CONSTRAINT` for the foreign key
/// at `position` in the table's list. The constraint is named
/// `<table>_fk_<position>`.
pub fn foreign_key_sql(
    schema: &str,
    table: &TableSpec,
    position: usize,
    fk: &ForeignKeySpec,
) -> EngineResult<String> {
    let constraint = table.foreign_key_name(position);
    validate_identifier(&constraint)?;

    let target = qualified_name(schema, &table.name)?;
    let referenced = qualified_name(fk.target_schema(schema), &fk.references_table)?;
    let columns = quoted_list(&fk.columns)?;
    let references_columns = quoted_list(&fk.references_columns)?;

    let mut actions = String::new();
    if let Some(action) = &fk.on_delete {
        actions.push_str(&format!(" ON DELETE {}", action.to_sql()));
    }
    if let Some(action) = &fk.on_update {
        actions.push_str(&format!(" ON UPDATE {}", action.to_sql()));
    }

    let mut sql = String::with_capacity(512);
    sql.push_str("DO $$\n");
    sql.push_str("BEGIN\n");
    sql.push_str("  IF NOT EXISTS (\n");
    sql.push_str("    SELECT 1 FROM information_schema.table_constraints tc\n");
    sql.push_str("    WHERE tc.constraint_type = 'FOREIGN KEY'\n");
    sql.push_str(&format!("      AND tc.table_schema = {}\n", quote_literal(schema)));
    sql.push_str(&format!("      AND tc.table_name = {}\n", quote_literal(&table.name)));
    sql.push_str(&format!(
        "      AND tc.constraint_name = {}\n",
        quote_literal(&constraint)
    ));
    sql.push_str("  ) THEN\n");
    sql.push_str(&format!("    ALTER TABLE {}\n", target));
    sql.push_str(&format!(
        "      ADD CONSTRAINT {}\n",
        quote_identifier(&constraint)
    ));
    sql.push_str(&format!(
        "      FOREIGN KEY ({}) REFERENCES {} ({}){};\n",
        columns, referenced, references_columns, actions
    ));
    sql.push_str("  END IF;\n");
    sql.push_str("END$$;");

    Ok(sql)
}
