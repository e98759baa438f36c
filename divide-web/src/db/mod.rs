//! Database access layer for divide-web
//!
//! The service is a pure reader: every pooled connection runs with
//! `default_transaction_read_only` enabled, so an accidental write fails at
//! the database rather than mutating catalog data.

use anyhow::{Context, Result};
use divide_common::config::DatabaseSettings;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;
use std::time::Duration;

/// Connect to the catalog database with read-only sessions
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool> {
    let options = PgConnectOptions::from_str(&settings.url)
        .context("Invalid Postgres connection URL")?
        .options([("default_transaction_read_only", "on")]);

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
        .context("Failed to connect to database in read-only mode")?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Read-only session mode: writes must fail
    #[tokio::test]
    async fn test_readonly_connection() {
        // Requires a reachable Postgres instance; skip otherwise
        let url = match std::env::var("DIVIDE_TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("Skipping test: DIVIDE_TEST_DATABASE_URL not set");
                return;
            }
        };

        let settings = DatabaseSettings {
            url,
            max_connections: 1,
        };

        let pool = connect(&settings)
            .await
            .expect("Should connect in read-only mode");

        let result = sqlx::query("CREATE TABLE _test_write (id INTEGER)")
            .execute(&pool)
            .await;

        assert!(result.is_err(), "Write operation should fail in read-only mode");
    }
}
