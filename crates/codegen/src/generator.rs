//! # Script Generator
//!
//! The `Generator` is the top-level entry point for SQL generation. It takes
//! a [`SchemaSpec`] and a [`GeneratorConfig`], validates it, renders
//! every statement and joins them into a single [`GeneratedScript`].
//!
//! ## Pipeline
//!
//! ```text
//! SchemaSpec + GeneratorConfig
//!         │
//!         ▼
//!   SchemaSpec::validate()          (structure: arity, empty lists)
//!         │
//!         ▼
//!   ddl::render_statements()        (identifiers validated as rendered)
//!         │
//!         ▼
//!   GeneratedScript { sql, summary }
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pgspec_codegen::{Generator, GeneratorConfig};
//! use pgspec_ir::load_spec;
//!
//! let spec = load_spec(json, "acme")?;
//! let script = Generator::new(GeneratorConfig::default()).generate(&spec)?;
//!
//! script.write_to("out/schema.sql")?;
//! ```

use pgspec_core::{EngineResult, Validatable, quote_identifier};
use pgspec_ir::SchemaSpec;

use crate::ddl;
use crate::{GeneratedScript, GeneratorConfig};

// ============================================================================
// Generator
// ============================================================================

/// Top-level SQL generator.
///
/// Stateless aside from its configuration: the same spec always produces
/// byte-identical output.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a new generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Create a generator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }

    /// Render the whole script.
    ///
    /// # Errors
    ///
    /// `MalformedSpec` if the model is structurally inconsistent and
    /// `InvalidIdentifier` for the first identifier that is empty or too
    /// long. Nothing is returned on failure; there is no partial script.
    pub fn generate(&self, spec: &SchemaSpec) -> EngineResult<GeneratedScript> {
        spec.validate()?;

        let statements = ddl::render_statements(spec, self.config.include_seed)?;
        let summary = summarize(spec, statements.len(), self.config.include_seed);

        let mut parts = Vec::with_capacity(statements.len() + 1);
        if self.config.include_header {
            parts.push(header(spec));
        }
        parts.extend(statements);

        let sql = parts.join("\n\n") + "\n";

        tracing::debug!(
            schema = %spec.schema,
            tables = summary.tables,
            statements = summary.statements,
            bytes = sql.len(),
            "Generated SQL script"
        );

        Ok(GeneratedScript {
            schema: spec.schema.clone(),
            sql,
            summary,
        })
    }
}

/// Generate SQL with the default configuration.
pub fn generate_sql(spec: &SchemaSpec) -> EngineResult<String> {
    Generator::with_defaults()
        .generate(spec)
        .map(|script| script.sql)
}

fn header(spec: &SchemaSpec) -> String {
    format!(
        "-- Generated by pgspec {}\n-- Schema: {} ({} table(s))",
        crate::VERSION,
        comment_text(&quote_identifier(&spec.schema)),
        spec.table_count()
    )
}

/// A line break would end the `--` comment and expose the rest as SQL.
fn comment_text(text: &str) -> String {
    text.replace('\r', "\\r").replace('\n', "\\n")
}

// ============================================================================
// GenerationSummary
// ============================================================================

/// Counts describing a generated script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Tables created
    pub tables: usize,
    /// Column definitions across all tables
    pub columns: usize,
    /// Guarded foreign key blocks
    pub foreign_keys: usize,
    /// Indexes, including per-column unique ones
    pub indexes: usize,
    /// Seed `INSERT`s rendered
    pub seed_rows: usize,
    /// Total statements, schema creation included
    pub statements: usize,
}

impl std::fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} table(s), {} column(s), {} foreign key(s), {} index(es), {} seed row(s), {} statement(s)",
            self.tables,
            self.columns,
            self.foreign_keys,
            self.indexes,
            self.seed_rows,
            self.statements
        )
    }
}

fn summarize(spec: &SchemaSpec, statements: usize, include_seed: bool) -> GenerationSummary {
    let mut summary = GenerationSummary {
        tables: spec.table_count(),
        statements,
        ..Default::default()
    };

    for table in &spec.tables {
        summary.columns += table.columns.len();
        summary.foreign_keys += table.foreign_keys.len();
        summary.indexes += table.index_count();
        if include_seed {
            summary.seed_rows += table.seed.len();
        }
    }

    summary
}

// ============================================================================
// Tests
// ============================================================================
