//! # pgspec IR (Intermediate Representation)
//!
//! This crate provides the in-memory model of a specification document and
//! the loader that builds it from JSON.
//!
//! ## Core Concepts
//!
//! - **SchemaSpec**: the root; a target schema name and its tables
//! - **TableSpec**: columns, primary key, foreign keys, indexes, seed rows
//! - **ColumnSpec**: a column with its canonical type, nullability, default
//! - **ForeignKeySpec** / **IndexSpec**: objects created after the table
//!
//! Everything keeps declaration order, so the same document always renders
//! the same SQL.
//!

// Module declarations
pub mod column;
pub mod constraint;
pub mod schema;
pub mod serialization;
pub mod table;

// Re-export commonly used types at crate root
pub use column::ColumnSpec;
pub use constraint::{ForeignKeySpec, IndexSpec};
pub use schema::SchemaSpec;
pub use serialization::{load_spec, load_spec_file};
pub use table::{SeedRow, TableSpec};

// Re-export core types that are commonly used with IR
pub use pgspec_core::{EngineError, EngineResult, ReferentialAction, Validatable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

