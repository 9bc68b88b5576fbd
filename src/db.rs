//! SQLite connection pooling and schema migrations.

use diesel::r2d2::{ConnectionManager, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Failures while preparing the database.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to create connection pool: {0}")]
    Pool(#[from] PoolError),
    #[error("failed to run migrations: {0}")]
    Migration(String),
}

/// Build an r2d2 pool for the SQLite database at `database_path`.
pub fn establish_connection_pool(database_path: &str) -> Result<DbPool, DbError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_path);
    Ok(Pool::builder().build(manager)?)
}

/// Create the catalog schema if it does not exist yet.
pub fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| DbError::Migration(e.to_string()))?;
    Ok(())
}
