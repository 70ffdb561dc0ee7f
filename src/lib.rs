//! # pgspec
//!
//! Turns a declarative JSON description of tables into one idempotent
//! PostgreSQL script. Every statement is safe to run again against a
//! database that already holds some or all of the objects.
//!
//! ```
//! let json = r#"{"tables": [{"name": "users", "columns": [{"name": "id", "type": "uuid"}]}]}"#;
//! let sql = pgspec::generate_from_json(json, "acme").unwrap();
//! assert!(sql.starts_with("CREATE SCHEMA IF NOT EXISTS \"acme\";"));
//! ```
//!
//! The work is split across the workspace crates, re-exported here:
//!
//! - [`pgspec_core`]: errors, identifier rules, type aliases
//! - [`pgspec_ir`]: the specification model and its JSON loader
//! - [`pgspec_codegen`]: SQL rendering
//!

pub use pgspec_codegen::{
    GeneratedScript, GenerationSummary, Generator, GeneratorConfig, generate_sql,
};
pub use pgspec_core::{
    EngineError, EngineResult, MAX_IDENTIFIER_LEN, ReferentialAction, Validatable,
    derive_identifier, format_sql_value, normalize_type, quote_identifier, quote_literal,
    validate_identifier,
};
pub use pgspec_ir::{
    ColumnSpec, ForeignKeySpec, IndexSpec, SchemaSpec, SeedRow, TableSpec, load_spec,
    load_spec_file,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load a JSON document for `schema` and render it with the default
/// generator settings.
pub fn generate_from_json(json: &str, schema: &str) -> EngineResult<String> {
    let spec = load_spec(json, schema)?;
    generate_sql(&spec)
}
