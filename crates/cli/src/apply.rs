//! Applying a generated script to Postgres
//!
//! One TLS connection, one batch, no retry. The script is sent over the
//! simple-query protocol, which runs a multi-statement batch as one implicit
//! transaction unless `single_transaction` asks for an explicit one.

use pgspec_core::{EngineError, EngineResult};
use sqlx::Connection;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgSslMode};

use crate::config::DbConfig;

/// Execute `sql` against the configured database.
pub async fn apply_sql(sql: &str, config: &DbConfig, single_transaction: bool) -> EngineResult<()> {
    tracing::info!(target_db = %config.target(), single_transaction, "Connecting");

    let mut conn = PgConnection::connect_with(&connect_options(config))
        .await
        .map_err(map_sqlx_error)?;

    if single_transaction {
        let mut tx = conn.begin().await.map_err(map_sqlx_error)?;
        sqlx::raw_sql(sql)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        tx.commit().await.map_err(map_sqlx_error)?;
    } else {
        sqlx::raw_sql(sql)
            .execute(&mut conn)
            .await
            .map_err(map_sqlx_error)?;
    }

    conn.close().await.map_err(map_sqlx_error)?;
    tracing::info!(bytes = sql.len(), "Script applied");
    Ok(())
}

fn connect_options(config: &DbConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database)
        .username(&config.user)
        .password(&config.password)
        .ssl_mode(PgSslMode::Require)
}

/// Classify a driver error into the engine's database error kinds.
pub fn map_sqlx_error(err: sqlx::Error) -> EngineError {
    match &err {
        sqlx::Error::Database(db) => {
            let code = db.code();
            classify_sqlstate(code.as_deref(), db.message())
        }
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Configuration(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => EngineError::Connection(err.to_string()),
        _ => EngineError::Execution(err.to_string()),
    }
}

/// SQLSTATE class 28 is "invalid authorization specification".
fn classify_sqlstate(code: Option<&str>, message: &str) -> EngineError {
    match code {
        Some(code) if code.starts_with("28") => EngineError::Auth(message.to_string()),
        _ => EngineError::Execution(message.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_sqlstate() {
        let err = classify_sqlstate(Some("28P01"), "password authentication failed");
        assert!(matches!(err, EngineError::Auth(ref m) if m == "password authentication failed"));

        let err = classify_sqlstate(Some("28000"), "no pg_hba.conf entry");
        assert!(matches!(err, EngineError::Auth(_)));
    }

    #[test]
    fn test_execution_sqlstate() {
        let err = classify_sqlstate(Some("42P01"), "relation \"acme.orgs\" does not exist");
        assert!(
            matches!(err, EngineError::Execution(ref m) if m == "relation \"acme.orgs\" does not exist")
        );
        assert!(matches!(classify_sqlstate(None, "boom"), EngineError::Execution(_)));
    }

    #[test]
    fn test_transport_errors_are_connection_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(matches!(
            map_sqlx_error(sqlx::Error::Io(io)),
            EngineError::Connection(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            EngineError::Connection(_)
        ));
    }

    #[test]
    fn test_other_errors_are_execution_errors() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(err.is_database_error());
        assert!(matches!(err, EngineError::Execution(_)));
    }

    #[test]
    fn test_connect_options() {
        let config = DbConfig {
            host: "db.abcdefgh.supabase.co".to_string(),
            port: 6543,
            database: "postgres".to_string(),
            user: "postgres".to_string(),
            password: "secret".to_string(),
        };
        let options = connect_options(&config);
        assert_eq!(options.get_host(), "db.abcdefgh.supabase.co");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("postgres"));
        assert_eq!(options.get_username(), "postgres");
    }
}
