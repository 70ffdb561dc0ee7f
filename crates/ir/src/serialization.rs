//! Loading specification documents
//!
//! This module turns a JSON document into a [`SchemaSpec`]. Parsing is
//! strict about shape (required fields, field types) and reports the path of
//! the offending element, but performs no cross-table checks: a foreign key
//! may name a table that the document never declares.
//!
//! Optional fields are read as `Option`s and defaulted in one place, while
//! the raw document is converted into the model.

use crate::column::ColumnSpec;
use crate::constraint::{ForeignKeySpec, IndexSpec};
use crate::schema::SchemaSpec;
use crate::table::{SeedRow, TableSpec};
use pgspec_core::{
    EngineError, EngineResult, ReferentialAction, Validatable, format_sql_value, normalize_type,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

// ============================================================================
// Raw Document Shapes
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawTable {
    name: String,
    columns: Vec<Value>,
    #[serde(default)]
    primary_key: Option<Vec<String>>,
    #[serde(default)]
    foreign_keys: Option<Vec<Value>>,
    #[serde(default)]
    indexes: Option<Vec<Value>>,
    #[serde(default)]
    seed: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct RawColumn {
    name: String,
    #[serde(rename = "type")]
    data_type: String,
    #[serde(default)]
    nullable: Option<bool>,
    #[serde(default)]
    default: Option<Value>,
    #[serde(default)]
    unique: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawForeignKey {
    columns: Vec<String>,
    references_table: String,
    references_columns: Vec<String>,
    #[serde(default)]
    references_schema: Option<String>,
    #[serde(default)]
    on_delete: Option<String>,
    #[serde(default)]
    on_update: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawIndex {
    #[serde(default)]
    name: Option<String>,
    columns: Vec<String>,
    #[serde(default)]
    unique: Option<bool>,
}

// ============================================================================
// Load Functions
// ============================================================================

/// Load a specification from JSON text
///
/// # Arguments
///
/// * `json` - The document text (`{"tables": [...]}`)
/// * `schema_name` - Target schema; not validated here
///
/// # Example
///
/// ```rust
/// use pgspec_ir::load_spec;
///
/// let spec = load_spec(
///     r#"{"tables": [{"name": "users", "columns": [{"name": "id", "type": "uuid"}]}]}"#,
///     "acme",
/// )
/// .unwrap();
/// assert_eq!(spec.tables[0].columns[0].data_type, "uuid");
/// ```
pub fn load_spec(json: &str, schema_name: &str) -> EngineResult<SchemaSpec> {
    let document: Value = serde_json::from_str(json)?;

    let Value::Object(mut document) = document else {
        return Err(EngineError::InvalidJson(
            "top-level document must be a JSON object".to_string(),
        ));
    };

    let raw_tables = match document.remove("tables") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(tables)) => tables,
        Some(other) => {
            return Err(EngineError::malformed(
                "tables",
                format!("expected an array, found {}", kind_of(&other)),
            ));
        }
    };

    let mut spec = SchemaSpec::new(schema_name);
    for (i, raw) in raw_tables.into_iter().enumerate() {
        let table = convert_table(raw, &format!("tables[{}]", i))?;
        spec = spec.with_table(table);
    }

    tracing::debug!(
        schema = schema_name,
        tables = spec.table_count(),
        "Loaded specification"
    );

    Ok(spec)
}

/// Load a specification from a file
pub fn load_spec_file(path: impl AsRef<Path>, schema_name: &str) -> EngineResult<SchemaSpec> {
    let path = path.as_ref();

    let json = std::fs::read_to_string(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    load_spec(&json, schema_name)
}

// ============================================================================
// Conversion
// ============================================================================

fn convert_table(raw: Value, path: &str) -> EngineResult<TableSpec> {
    let raw: RawTable = parse_at(raw, path)?;

    if raw.columns.is_empty() {
        return Err(EngineError::malformed(
            format!("{}.columns", path),
            "a table needs at least one column",
        ));
    }

    let mut table = TableSpec::new(raw.name);

    for (j, raw_column) in raw.columns.into_iter().enumerate() {
        let column = convert_column(raw_column, &format!("{}.columns[{}]", path, j))?;
        table = table.with_column(column);
    }

    if let Some(pk) = raw.primary_key {
        table = table.with_primary_key(pk);
    }

    for (k, raw_fk) in raw.foreign_keys.unwrap_or_default().into_iter().enumerate() {
        let fk = convert_foreign_key(raw_fk, &format!("{}.foreign_keys[{}]", path, k))?;
        table = table.with_foreign_key(fk);
    }

    for (k, raw_index) in raw.indexes.unwrap_or_default().into_iter().enumerate() {
        let index = convert_index(raw_index, &format!("{}.indexes[{}]", path, k))?;
        table = table.with_index(index);
    }

    for (k, raw_row) in raw.seed.unwrap_or_default().into_iter().enumerate() {
        let row = convert_seed_row(raw_row, &format!("{}.seed[{}]", path, k))?;
        table = table.with_seed_row(row);
    }

    table.validate()?;
    Ok(table)
}

fn convert_column(raw: Value, path: &str) -> EngineResult<ColumnSpec> {
    let raw: RawColumn = parse_at(raw, path)?;

    let default = match raw.default {
        None | Some(Value::Null) => None,
        Some(Value::String(expr)) => Some(expr),
        Some(literal @ (Value::Bool(_) | Value::Number(_))) => Some(format_sql_value(&literal)),
        Some(other) => {
            return Err(EngineError::malformed(
                format!("{}.default", path),
                format!(
                    "expected a SQL expression string or scalar, found {}",
                    kind_of(&other)
                ),
            ));
        }
    };

    Ok(ColumnSpec {
        name: raw.name,
        data_type: normalize_type(&raw.data_type),
        nullable: raw.nullable.unwrap_or(true),
        default,
        unique: raw.unique.unwrap_or(false),
    })
}

fn convert_foreign_key(raw: Value, path: &str) -> EngineResult<ForeignKeySpec> {
    let raw: RawForeignKey = parse_at(raw, path)?;

    if raw.columns.is_empty() {
        return Err(EngineError::malformed(
            format!("{}.columns", path),
            "columns cannot be empty",
        ));
    }
    if raw.columns.len() != raw.references_columns.len() {
        return Err(EngineError::malformed(
            format!("{}.references_columns", path),
            format!(
                "expected {} referenced column(s) to match local columns, found {}",
                raw.columns.len(),
                raw.references_columns.len()
            ),
        ));
    }

    Ok(ForeignKeySpec {
        columns: raw.columns,
        references_table: raw.references_table,
        references_columns: raw.references_columns,
        references_schema: raw.references_schema,
        on_delete: parse_action(raw.on_delete),
        on_update: parse_action(raw.on_update),
    })
}

fn convert_index(raw: Value, path: &str) -> EngineResult<IndexSpec> {
    let raw: RawIndex = parse_at(raw, path)?;

    if raw.columns.is_empty() {
        return Err(EngineError::malformed(
            format!("{}.columns", path),
            "columns cannot be empty",
        ));
    }

    Ok(IndexSpec {
        // An empty name means "derive one"
        name: raw.name.filter(|n| !n.is_empty()),
        columns: raw.columns,
        unique: raw.unique.unwrap_or(false),
    })
}

fn convert_seed_row(raw: Value, path: &str) -> EngineResult<SeedRow> {
    match raw {
        Value::Object(row) if !row.is_empty() => Ok(row),
        Value::Object(_) => Err(EngineError::malformed(path, "seed row has no columns")),
        other => Err(EngineError::malformed(
            path,
            format!("expected an object, found {}", kind_of(&other)),
        )),
    }
}

fn parse_action(raw: Option<String>) -> Option<ReferentialAction> {
    raw.as_deref().and_then(ReferentialAction::parse)
}

// ============================================================================
// Utility Functions
// ============================================================================

/// Deserialize `value`, reporting failures against `path`
fn parse_at<T: DeserializeOwned>(value: Value, path: &str) -> EngineResult<T> {
    serde_json::from_value(value).map_err(|e| EngineError::malformed(path, e.to_string()))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// Tests
// ============================================================================
