//! Helpers for integration tests.

use catalog_agent::db::{DbPool, establish_connection_pool, run_migrations};
use diesel::RunQueryDsl;
use tempfile::NamedTempFile;

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        Self::with_existing_schema(&[])
    }

    /// Run `statements` on the empty database before the migrations, the way
    /// a database created by an earlier deployment would look.
    pub fn with_existing_schema(statements: &[&str]) -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        {
            let mut conn = pool
                .get()
                .expect("Failed to get SQLite connection from pool.");
            for statement in statements {
                diesel::sql_query(*statement)
                    .execute(&mut conn)
                    .expect("Failed to prepare existing schema");
            }
        }
        run_migrations(&pool).expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
