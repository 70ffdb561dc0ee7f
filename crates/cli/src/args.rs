//! CLI argument definitions using clap
//!
//! - pgspec generate --app-name "Acme CRM" --spec-file crm.json --write-sql out/crm.sql
//! - pgspec generate --schema acme --spec-file crm.json --apply
//! - pgspec validate --schema acme --spec-file crm.json
//! - pgspec derive-name "Acme CRM!!"

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pgspec")]
#[command(about = "Generate idempotent PostgreSQL DDL from a JSON schema description")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the SQL script, then write, print and optionally apply it
    Generate(GenerateArgs),

    /// Load and render a spec in memory without writing anything
    Validate(ValidateArgs),

    /// Print the schema identifier derived from a free-form label
    DeriveName {
        /// Application name or any other label
        label: String,
    },
}

/// Where the schema name comes from
#[derive(Debug, Clone, Args)]
pub struct SchemaArgs {
    /// Target schema name (overrides --app-name)
    #[arg(long)]
    pub schema: Option<String>,

    /// Label used to derive the schema name when --schema is absent
    #[arg(long)]
    pub app_name: Option<String>,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub target: SchemaArgs,

    /// Path to the JSON spec document
    #[arg(long)]
    pub spec_file: PathBuf,

    /// Write the generated SQL to this file
    #[arg(long)]
    pub write_sql: Option<PathBuf>,

    /// Print the SQL to stdout (default when --write-sql is absent)
    #[arg(long)]
    pub stdout: bool,

    /// Start the script with a comment header
    #[arg(long)]
    pub header: bool,

    /// Leave seed rows out of the script
    #[arg(long)]
    pub no_seed: bool,

    /// Apply the generated SQL to Postgres
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub target: SchemaArgs,

    /// Path to the JSON spec document
    #[arg(long)]
    pub spec_file: PathBuf,
}

/// Connection settings for `--apply`
#[derive(Debug, Clone, Args)]
pub struct DbArgs {
    /// Postgres host (defaults to db.<ref>.supabase.co derived from SUPABASE_URL)
    #[arg(long, env = "SUPABASE_DB_HOST")]
    pub db_host: Option<String>,

    /// Project URL used to derive the database host
    #[arg(long, env = "SUPABASE_URL", hide = true)]
    pub supabase_url: Option<String>,

    /// Postgres port
    #[arg(long, env = "SUPABASE_DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Postgres database name
    #[arg(long, env = "SUPABASE_DB_NAME", default_value = "postgres")]
    pub db_name: String,

    /// Postgres user
    #[arg(long, env = "SUPABASE_DB_USER", default_value = "postgres")]
    pub db_user: String,

    /// Postgres password
    #[arg(long, env = "SUPABASE_DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Wrap the whole script in one explicit transaction
    #[arg(long)]
    pub single_transaction: bool,
}
