//! The root of a specification: a schema name and its tables.

use pgspec_core::{EngineResult, Validatable};

use crate::table::TableSpec;

/// A complete data model targeting one PostgreSQL schema
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaSpec {
    /// Target schema name
    pub schema: String,

    /// Tables in declaration order
    pub tables: Vec<TableSpec>,
}

impl SchemaSpec {
    /// Create a schema with no tables
    pub fn new(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            tables: Vec::new(),
        }
    }

    /// Append a table
    pub fn with_table(mut self, table: TableSpec) -> Self {
        self.tables.push(table);
        self
    }

    /// Number of tables
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

impl Validatable for SchemaSpec {
    fn validate(&self) -> EngineResult<()> {
        for table in &self.tables {
            table.validate()?;
        }
        Ok(())
    }
}
