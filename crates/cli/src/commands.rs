//! Command handlers

use colored::Colorize;
use pgspec_codegen::{Generator, GeneratorConfig};
use pgspec_core::{EngineResult, derive_identifier};
use pgspec_ir::load_spec_file;

use crate::apply::apply_sql;
use crate::args::{Cli, Commands, GenerateArgs, ValidateArgs};
use crate::config::{DbConfig, resolve_schema};

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> EngineResult<()> {
    match cli.command {
        Commands::Generate(args) => generate(args).await,
        Commands::Validate(args) => validate(args),
        Commands::DeriveName { label } => {
            println!("{}", derive_identifier(&label));
            Ok(())
        }
    }
}

async fn generate(args: GenerateArgs) -> EngineResult<()> {
    let schema = resolve_schema(&args.target)?;

    // Resolve connection settings before anything touches the filesystem
    let db = if args.apply {
        Some(DbConfig::from_args(&args.db)?)
    } else {
        None
    };

    let spec = load_spec_file(&args.spec_file, &schema)?;

    let mut config = GeneratorConfig::new();
    if args.header {
        config = config.with_header();
    }
    if args.no_seed {
        config = config.without_seed();
    }
    let script = Generator::new(config).generate(&spec)?;
    tracing::info!(schema = %script.schema, "{}", script.summary);

    let mut wrote_any = false;
    if let Some(path) = &args.write_sql {
        let written = script.write_to(path)?;
        eprintln!("Wrote SQL to: {}", written.display());
        wrote_any = true;
    }

    if args.stdout || !wrote_any {
        print!("{}", script.sql);
    }

    if let Some(db) = db {
        eprintln!("Applying SQL to {} (SSL)...", db.target());
        apply_sql(&script.sql, &db, args.db.single_transaction).await?;
        eprintln!("{}", "SQL applied successfully.".green());
    }

    Ok(())
}

fn validate(args: ValidateArgs) -> EngineResult<()> {
    let schema = resolve_schema(&args.target)?;
    let spec = load_spec_file(&args.spec_file, &schema)?;
    let script = Generator::with_defaults().generate(&spec)?;

    println!(
        "{} schema \"{}\": {}",
        "✓".green().bold(),
        script.schema,
        script.summary
    );
    Ok(())
}
