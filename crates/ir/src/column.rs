//! Column definitions
//!
//! This module contains the `ColumnSpec` struct, one column of a table in
//! the order it was declared.

use pgspec_core::{EngineError, EngineResult, Validatable, normalize_type};

// ============================================================================
// ColumnSpec
// ============================================================================

/// A column of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Column name
    pub name: String,

    /// Canonical SQL type (aliases already normalized)
    pub data_type: String,

    /// Whether NULL values are allowed
    pub nullable: bool,

    /// Raw SQL default expression.
    ///
    /// Inserted into the DDL verbatim: `now()`, `gen_random_uuid()`,
    /// `'draft'`. No escaping is applied, so only trusted input belongs here.
    pub default: Option<String>,

    /// Whether a single-column unique index is created for this column
    pub unique: bool,
}

impl ColumnSpec {
    /// Create a nullable, non-unique column. `data_type` may be an alias.
    pub fn new(name: impl Into<String>, data_type: &str) -> Self {
        Self {
            name: name.into(),
            data_type: normalize_type(data_type),
            nullable: true,
            default: None,
            unique: false,
        }
    }

    /// Mark the column NOT NULL
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Set a raw SQL default expression
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Request a single-column unique index
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

impl Validatable for ColumnSpec {
    fn validate(&self) -> EngineResult<()> {
        if self.data_type.trim().is_empty() {
            return Err(EngineError::malformed(
                format!("column '{}'", self.name),
                "column type cannot be empty",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
