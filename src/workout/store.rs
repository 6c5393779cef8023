/// SQLite-backed workout store
///
/// Entry point for the core workflow. The operations are split by concern:
/// - accumulator: staging drafts and the pending workout name
/// - commit: promoting drafts into a saved workout
/// - reporting: listing and detail queries
/// - deletion: removing a saved workout with its exercises
///
/// Every method takes the owner explicitly and filters on it.

use crate::workout::error::Result;
use sqlx::{sqlite::SqlitePool, Sqlite, Transaction};

#[derive(Debug, Clone)]
pub struct WorkoutStore {
    pub(crate) pool: SqlitePool,
}

impl WorkoutStore {
    /// Create new store instance over an initialised database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a transaction that holds the write lock from its first statement
    ///
    /// A deferred `BEGIN` that reads before writing cannot upgrade its lock
    /// while another writer is active and fails with SQLITE_BUSY without
    /// waiting. `BEGIN IMMEDIATE` queues on the busy timeout instead.
    pub(crate) async fn begin_write(&self) -> Result<Transaction<'static, Sqlite>> {
        Ok(self.pool.begin_with("BEGIN IMMEDIATE").await?)
    }
}
