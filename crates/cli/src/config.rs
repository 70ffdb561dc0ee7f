//! Resolution of schema names and database settings from CLI arguments

use pgspec_core::{EngineError, EngineResult, derive_identifier, validate_identifier};
use std::fmt;

use crate::args::{DbArgs, SchemaArgs};

/// Pick the target schema: `--schema` verbatim (validated), otherwise the
/// identifier derived from `--app-name`.
pub fn resolve_schema(target: &SchemaArgs) -> EngineResult<String> {
    match (&target.schema, &target.app_name) {
        (Some(schema), app_name) => {
            if app_name.is_some() {
                tracing::warn!(schema = %schema, "--app-name ignored because --schema was given");
            }
            validate_identifier(schema)?;
            Ok(schema.clone())
        }
        (None, Some(app_name)) => {
            let schema = derive_identifier(app_name);
            tracing::debug!(app_name = %app_name, schema = %schema, "Derived schema name");
            Ok(schema)
        }
        (None, None) => Err(EngineError::MissingConfig(
            "provide --schema or --app-name".to_string(),
        )),
    }
}

/// Derive `db.<ref>.supabase.co` from a project URL such as
/// `https://<ref>.supabase.co`.
pub fn supabase_db_host(url: &str) -> Option<String> {
    let url = url.trim();
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let host = rest.split(['/', ':']).next()?;
    let project_ref = host.strip_suffix(".supabase.co")?;

    if project_ref.is_empty() || project_ref.contains('.') {
        return None;
    }
    Some(format!("db.{}.supabase.co", project_ref))
}

/// Resolved connection settings for the apply step
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl DbConfig {
    /// Resolve settings from arguments (env fallbacks already applied by clap)
    pub fn from_args(args: &DbArgs) -> EngineResult<Self> {
        let host = match (&args.db_host, &args.supabase_url) {
            (Some(host), _) if !host.trim().is_empty() => host.trim().to_string(),
            (_, Some(url)) => supabase_db_host(url).ok_or_else(|| {
                EngineError::InvalidConfig(format!(
                    "cannot derive a database host from SUPABASE_URL '{}'",
                    url
                ))
            })?,
            _ => {
                return Err(EngineError::MissingConfig(
                    "database host: pass --db-host or set SUPABASE_DB_HOST or SUPABASE_URL"
                        .to_string(),
                ));
            }
        };

        let password = args
            .db_password
            .clone()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| {
                EngineError::MissingConfig(
                    "database password: pass --db-password or set SUPABASE_DB_PASSWORD"
                        .to_string(),
                )
            })?;

        Ok(Self {
            host,
            port: args.db_port,
            database: args.db_name.clone(),
            user: args.db_user.clone(),
            password,
        })
    }

    /// `host:port/database as user`, safe to print
    pub fn target(&self) -> String {
        format!(
            "{}:{}/{} as {}",
            self.host, self.port, self.database, self.user
        )
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}
