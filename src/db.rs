//! SQLite pool, per-connection setup and embedded migrations.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sql_types::{Nullable, Text};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use log::error;

use crate::repository::errors::{RepositoryError, RepositoryResult};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

diesel::define_sql_function! {
    /// Unicode lowercase of a nullable string. SQLite's own `lower` and
    /// `LIKE` only fold ASCII.
    fn fold_case(value: Nullable<Text>) -> Nullable<Text>;
}

/// Pragmas and functions installed on every pooled member-search connection.
#[derive(Debug)]
pub struct SqliteSetup {
    pub wal: bool,
    pub foreign_keys: bool,
    /// How long a writer waits on a locked database before failing.
    pub busy_timeout: Option<Duration>,
}

impl Default for SqliteSetup {
    fn default() -> Self {
        Self {
            wal: true,
            foreign_keys: true,
            busy_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl SqliteSetup {
    fn apply(&self, conn: &mut SqliteConnection) -> diesel::QueryResult<()> {
        if self.wal {
            conn.batch_execute("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;")?;
        }
        // ON DELETE SET NULL on members.team_id relies on this.
        if self.foreign_keys {
            conn.batch_execute("PRAGMA foreign_keys = ON;")?;
        }
        if let Some(timeout) = self.busy_timeout {
            conn.batch_execute(&format!("PRAGMA busy_timeout = {};", timeout.as_millis()))?;
        }
        fold_case_utils::register_impl(conn, |value: Option<String>| {
            value.map(|value| value.to_lowercase())
        })
    }
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqliteSetup {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        self.apply(conn).map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds the pool for `database_url` (a file path or `:memory:`).
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(SqliteSetup::default()))
        .build(manager)
}

pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get().map_err(|e| {
        error!("Failed to get connection from pool: {e}");
        e
    })
}

/// Applies pending migrations from `migrations/`.
pub fn run_migrations(pool: &DbPool) -> RepositoryResult<()> {
    let mut conn = get_connection(pool)?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| RepositoryError::StorageUnavailable(format!("Migration failed: {e}")))?;
    Ok(())
}
