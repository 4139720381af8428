//! Database connection management and migrations.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel::{prelude::*, sql_query};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::info;

use crate::errors::StorageError;
use lexwatch_core::errors::Result;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Initialize the database at `db_path`: create the file (and parent
/// directory) if missing and run any pending migrations. Returns the path
/// back so callers can feed it straight into `create_pool`.
pub fn init(db_path: &str) -> Result<String> {
    if !Path::new(db_path).exists() {
        create_db_file(db_path)?;
    }

    run_migrations(db_path)?;

    Ok(db_path.to_string())
}

/// Create an r2d2 connection pool for the given database file.
pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = Pool::builder()
        .build(manager)
        .map_err(StorageError::from)?;
    Ok(Arc::new(pool))
}

/// Acquire a connection from the pool.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    Ok(pool.get().map_err(StorageError::from)?)
}

pub fn run_migrations(db_path: &str) -> Result<()> {
    let mut conn = establish_connection(db_path)?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| StorageError::MigrationFailed(e.to_string()))?;

    if !applied.is_empty() {
        info!("Applied {} database migration(s)", applied.len());
    }

    Ok(())
}

fn establish_connection(db_path: &str) -> Result<SqliteConnection> {
    let mut conn = SqliteConnection::establish(db_path).map_err(StorageError::from)?;

    // Foreign key constraint enforcement is per-connection in SQLite.
    sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .map_err(StorageError::from)?;

    Ok(conn)
}

fn create_db_file(db_path: &str) -> Result<()> {
    if let Some(db_dir) = Path::new(db_path).parent() {
        if !db_dir.exists() {
            fs::create_dir_all(db_dir)?;
        }
    }

    fs::File::create(db_path)?;
    Ok(())
}
