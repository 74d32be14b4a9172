use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sea_orm::sea_query::{LikeExpr, SimpleExpr};
use sea_orm::{ColumnTrait, DatabaseConnection, SqlxSqliteConnector};

const LIKE_ESCAPE: char = '!';

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        let path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| "dental_clinic.db".into());

        let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(5);

        Self {
            path: PathBuf::from(path),
            max_connections,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DatabaseSetupError {
    #[error("Failed to open database: {0}")]
    Connect(String),

    #[error("Failed to apply migrations: {0}")]
    Migrate(String),
}

/// Opens the clinic database file and brings the schema up to date.
///
/// The rollback journal (not WAL) is used so that the single `.db` file is
/// always a complete copy of the data; backup and restore copy that file.
pub async fn open(config: &DatabaseConfig) -> Result<DatabaseConnection, DatabaseSetupError> {
    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Delete)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
        .map_err(|e| DatabaseSetupError::Connect(e.to_string()))?;

    migrate(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool)).await
}

/// Private in-memory database on a single pinned connection.
pub async fn open_in_memory() -> Result<DatabaseConnection, DatabaseSetupError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(|e| DatabaseSetupError::Connect(e.to_string()))?
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(|e| DatabaseSetupError::Connect(e.to_string()))?;

    migrate(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool)).await
}

/// Substring match on `column` where `%` and `_` in `term` match literally.
pub fn contains_literal<C: ColumnTrait>(column: C, term: &str) -> SimpleExpr {
    column.like(LikeExpr::new(like_pattern(term)).escape(LIKE_ESCAPE))
}

fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

async fn migrate(db: DatabaseConnection) -> Result<DatabaseConnection, DatabaseSetupError> {
    Migrator::up(&db, None)
        .await
        .map_err(|e| DatabaseSetupError::Migrate(e.to_string()))?;

    Ok(db)
}
