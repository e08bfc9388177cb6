use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

pub type DbPool = SqlitePool;

/// Env var that overrides the default database location.
pub const DB_PATH_ENV: &str = "FNCAL_DB_PATH";

#[derive(Debug, Error)]
pub enum DbError {
  #[error("could not resolve a platform data directory for the database")]
  NoDataDir,
  #[error("failed to prepare data directory: {0}")]
  Io(#[from] std::io::Error),
  #[error(transparent)]
  Sqlx(#[from] sqlx::Error),
  #[error(transparent)]
  Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Get the path to the database file.
/// `FNCAL_DB_PATH` wins; otherwise the platform data dir
/// (e.g. ~/Library/Application Support/com.fncal.fn-calisthenics/fn-calisthenics.db)
pub fn db_path() -> Result<PathBuf, DbError> {
  if let Ok(path) = std::env::var(DB_PATH_ENV) {
    return Ok(PathBuf::from(path));
  }

  let dirs = directories::ProjectDirs::from("com", "fncal", "fn-calisthenics")
    .ok_or(DbError::NoDataDir)?;
  Ok(dirs.data_dir().join("fn-calisthenics.db"))
}

/// Initialize the database connection pool and run migrations
pub async fn initialize_db() -> Result<DbPool, DbError> {
  let db_path = db_path()?;

  // Create directory if it doesn't exist
  if let Some(parent) = db_path.parent() {
    fs::create_dir_all(parent)?;
  }

  let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
  info!(path = %db_path.display(), "initializing database");

  // Create connection pool
  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&db_url)
    .await?;

  // Run migrations
  sqlx::migrate!("./migrations").run(&pool).await?;

  info!("database ready");

  Ok(pool)
}
