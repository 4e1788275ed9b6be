use diesel::r2d2::{self, ConnectionManager};
use diesel::SqliteConnection;
use diesel_migrations::MigrationHarness;
use crate::{DbPool, MIGRATIONS};

/// In-memory database for unit tests. A single pooled connection keeps every
/// query on the same :memory: instance.
pub fn test_pool() -> DbPool {
    let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .build(manager)
        .expect("Failed to create test pool");
    let mut conn = pool.get().expect("Failed to get test connection");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run migrations");
    pool
}
