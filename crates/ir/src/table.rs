//! Table definitions
//!
//! A `TableSpec` owns its columns, primary key, foreign keys, indexes and
//! optional seed rows, all kept in declaration order so the generated SQL
//! reads in the same order as the input.

use pgspec_core::{EngineError, EngineResult, Validatable};
use serde_json::{Map, Value};

use crate::column::ColumnSpec;
use crate::constraint::{ForeignKeySpec, IndexSpec};

/// One seed row: column name to literal value, in document order
pub type SeedRow = Map<String, Value>;

// ============================================================================
// TableSpec
// ============================================================================

/// A table and everything declared on it
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    /// Table name
    pub name: String,

    /// Columns in declaration order (at least one)
    pub columns: Vec<ColumnSpec>,

    /// Primary key column names, if any
    pub primary_key: Option<Vec<String>>,

    /// Foreign keys in declaration order
    pub foreign_keys: Vec<ForeignKeySpec>,

    /// Indexes in declaration order
    pub indexes: Vec<IndexSpec>,

    /// Rows inserted after the table's DDL
    pub seed: Vec<SeedRow>,
}

impl TableSpec {
    /// Create an empty table
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            primary_key: None,
            foreign_keys: Vec::new(),
            indexes: Vec::new(),
            seed: Vec::new(),
        }
    }

    /// Append a column
    pub fn with_column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    /// Set the primary key columns. An empty list clears the primary key.
    pub fn with_primary_key<C>(mut self, columns: C) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        self.primary_key = if columns.is_empty() {
            None
        } else {
            Some(columns)
        };
        self
    }

    /// Append a foreign key
    pub fn with_foreign_key(mut self, fk: ForeignKeySpec) -> Self {
        self.foreign_keys.push(fk);
        self
    }

    /// Append an index
    pub fn with_index(mut self, index: IndexSpec) -> Self {
        self.indexes.push(index);
        self
    }

    /// Append a seed row
    pub fn with_seed_row(mut self, row: SeedRow) -> Self {
        self.seed.push(row);
        self
    }

    /// Columns flagged `unique`, in declaration order
    pub fn unique_columns(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter().filter(|c| c.unique)
    }

    /// Constraint name for the foreign key at `position`
    pub fn foreign_key_name(&self, position: usize) -> String {
        format!("{}_fk_{}", self.name, position)
    }

    /// Index name for a column flagged `unique`
    pub fn unique_index_name(&self, column: &str) -> String {
        format!("{}_{}_uniq_idx", self.name, column)
    }

    /// Number of indexes the table produces, including per-column unique ones
    pub fn index_count(&self) -> usize {
        self.indexes.len() + self.unique_columns().count()
    }
}

impl Validatable for TableSpec {
    fn validate(&self) -> EngineResult<()> {
        if self.columns.is_empty() {
            return Err(EngineError::malformed(
                format!("table '{}'", self.name),
                "a table needs at least one column",
            ));
        }

        for column in &self.columns {
            column.validate()?;
        }

        if let Some(pk) = &self.primary_key {
            if pk.is_empty() {
                return Err(EngineError::malformed(
                    format!("table '{}'.primary_key", self.name),
                    "primary key cannot be an empty list",
                ));
            }
        }

        for fk in &self.foreign_keys {
            fk.validate().map_err(|e| scoped(&self.name, e))?;
        }

        for index in &self.indexes {
            index.validate().map_err(|e| scoped(&self.name, e))?;
        }

        for (i, row) in self.seed.iter().enumerate() {
            if row.is_empty() {
                return Err(EngineError::malformed(
                    format!("table '{}'.seed[{}]", self.name, i),
                    "seed row has no columns",
                ));
            }
        }

        Ok(())
    }
}

/// Prefix a malformed-spec path with the owning table
fn scoped(table: &str, err: EngineError) -> EngineError {
    match err {
        EngineError::MalformedSpec { path, message } => {
            EngineError::malformed(format!("table '{}' {}", table, path), message)
        }
        other => other,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn users() -> TableSpec {
        TableSpec::new("users")
            .with_column(ColumnSpec::new("id", "uuid").not_null())
            .with_column(ColumnSpec::new("email", "string").unique())
            .with_column(ColumnSpec::new("handle", "shorttext").unique())
            .with_primary_key(["id"])
    }

    #[test]
    fn test_table_builder() {
        let table = users();
        assert_eq!(table.columns.len(), 3);
        assert_eq!(table.primary_key, Some(vec!["id".to_string()]));
        assert!(table.is_valid());
    }

    #[test]
    fn test_empty_primary_key_is_none() {
        let table = users().with_primary_key(Vec::<String>::new());
        assert!(table.primary_key.is_none());
    }

    #[test]
    fn test_unique_columns_in_order() {
        let table = users();
        let names: Vec<&str> = table.unique_columns().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["email", "handle"]);
        assert_eq!(table.index_count(), 2);
    }

    #[test]
    fn test_derived_names() {
        let table = users();
        assert_eq!(table.foreign_key_name(0), "users_fk_0");
        assert_eq!(table.foreign_key_name(3), "users_fk_3");
        assert_eq!(table.unique_index_name("email"), "users_email_uniq_idx");
    }

    #[test]
    fn test_table_without_columns_is_invalid() {
        let err = TableSpec::new("empty").validate().unwrap_err();
        assert!(err.to_string().contains("at least one column"));
    }

    #[test]
    fn test_invalid_foreign_key_is_scoped() {
        let table = users().with_foreign_key(ForeignKeySpec::new(["a", "b"], "orgs", ["id"]));
        let err = table.validate().unwrap_err();
        match err {
            EngineError::MalformedSpec { path, .. } => {
                assert!(path.starts_with("table 'users'"));
            }
            other => panic!("Expected MalformedSpec, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_seed_row_is_invalid() {
        let table = users().with_seed_row(SeedRow::new());
        assert!(!table.is_valid());

        let mut row = SeedRow::new();
        row.insert("email".into(), json!("a@b.c"));
        assert!(users().with_seed_row(row).is_valid());
    }
}
