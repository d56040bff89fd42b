#![allow(dead_code)]

use member_search::db::{DbPool, establish_connection_pool, run_migrations};
use tempfile::TempDir;

/// A migrated SQLite database living in its own temporary directory.
///
/// The directory and the database files are removed when the value drops.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("utf-8 temp path").to_string();

        let pool = establish_connection_pool(&url).expect("build pool");
        run_migrations(&pool).expect("run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
