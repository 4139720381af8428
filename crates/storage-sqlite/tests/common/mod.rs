use std::sync::Arc;

use tempfile::TempDir;

use lexwatch_core::accounts::{AccountRepositoryTrait, NewAccount};
use lexwatch_storage_sqlite::accounts::AccountRepository;
use lexwatch_storage_sqlite::db::{self, DbPool};

/// A migrated database in a throwaway directory. The directory is removed
/// when the fixture drops.
pub struct TestDb {
    pub pool: Arc<DbPool>,
    _dir: TempDir,
}

pub fn setup_db() -> TestDb {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir
        .path()
        .join("app.db")
        .to_string_lossy()
        .to_string();

    let db_path = db::init(&db_path).expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");

    TestDb { pool, _dir: dir }
}

pub async fn create_account(pool: &Arc<DbPool>, account_id: &str) {
    let repo = AccountRepository::new(pool.clone());
    repo.create(NewAccount {
        id: Some(account_id.to_string()),
        name: "Acme GmbH".to_string(),
        email: "ops@acme.example".to_string(),
    })
    .await
    .expect("Failed to create account");
}
