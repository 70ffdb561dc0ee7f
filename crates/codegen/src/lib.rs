//! # pgspec Codegen
//!
//! SQL generation engine for pgspec.
//!
//! This crate renders a [`SchemaSpec`](pgspec_ir::SchemaSpec) into a single
//! idempotent PostgreSQL script.
//!
//! ## Features
//!
//! - **Schema & Tables**: `CREATE SCHEMA/TABLE IF NOT EXISTS`, input order kept
//! - **Foreign Keys**: added from `DO` blocks guarded by an
//!   `information_schema.table_constraints` lookup
//! - **Indexes**: declared indexes plus one unique index per `unique` column
//! - **Seed Rows**: `INSERT ... ON CONFLICT DO NOTHING`
//!

// ============================================================================
// Modules
// ============================================================================

pub mod ddl;
pub mod generator;

// ============================================================================
// Re-exports
// ============================================================================

pub use generator::{GenerationSummary, Generator, generate_sql};

use pgspec_core::{EngineError, EngineResult};
use std::path::{Path, PathBuf};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// GeneratorConfig
// ============================================================================

/// Configuration for the SQL generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Whether to start the script with a `--` comment header
    pub include_header: bool,

    /// Whether to render seed rows
    pub include_seed: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            include_header: false,
            include_seed: true,
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix the script with a comment header
    pub fn with_header(mut self) -> Self {
        self.include_header = true;
        self
    }

    /// Skip seed rows
    pub fn without_seed(mut self) -> Self {
        self.include_seed = false;
        self
    }
}

// ============================================================================
// GeneratedScript
// ============================================================================

/// A rendered SQL script
#[derive(Debug, Clone)]
pub struct GeneratedScript {
    /// Target schema
    pub schema: String,

    /// Complete SQL text, ending in a newline
    pub sql: String,

    /// What the script contains
    pub summary: GenerationSummary,
}

impl GeneratedScript {
    /// Write the script to `path`, creating parent directories as needed.
    ///
    /// Returns the absolute path written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> EngineResult<PathBuf> {
        let path = std::path::absolute(path.as_ref())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| EngineError::DirectoryCreate {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }

        std::fs::write(&path, &self.sql).map_err(|e| EngineError::FileWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;

        tracing::info!(path = %path.display(), bytes = self.sql.len(), "Wrote SQL script");

        Ok(path)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pgspec_ir::{ColumnSpec, SchemaSpec, TableSpec};
    use tempfile::TempDir;

    #[test]
    fn test_generator_config_default() {
        let config = GeneratorConfig::default();
        assert!(!config.include_header);
        assert!(config.include_seed);
    }

    #[test]
    fn test_generator_config_builder() {
        let config = GeneratorConfig::new().with_header().without_seed();
        assert!(config.include_header);
        assert!(!config.include_seed);
    }

    #[test]
    fn test_write_script_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/out/schema.sql");

        let spec = SchemaSpec::new("notes")
            .with_table(TableSpec::new("notes").with_column(ColumnSpec::new("body", "text")));
        let script = Generator::with_defaults().generate(&spec).unwrap();

        let written = script.write_to(&path).unwrap();
        assert!(written.is_absolute());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), script.sql);
    }
}
