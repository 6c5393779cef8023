/// SQLite connection pool and schema bootstrap
///
/// One database holds every table:
/// - user: identities owned by the authentication collaborator
/// - draft_exercise, pending_workout: per-user staging area
/// - workout, exercise: committed history
///
/// Foreign keys are enforced; nothing cascades implicitly.

use crate::config::DatabaseConfig;
use anyhow::Result;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::{str::FromStr, time::Duration};

/// Shared handle to the workout database
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect using the configured URL and make sure the schema exists
    ///
    /// In-memory URLs are pinned to a single connection that is never
    /// recycled, otherwise each checkout would see an empty database.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| anyhow::anyhow!("Invalid database URL '{}': {}", config.url, e))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_millis(config.busy_timeout_ms));

        let pool = if is_memory_url(&config.url) {
            tracing::debug!("🧪 Using in-memory database");
            memory_pool_options().connect_with(options).await?
        } else {
            tracing::info!(
                "🗄️ Opening database pool: {} ({} connections, busy_timeout={}ms)",
                config.url,
                config.max_connections,
                config.busy_timeout_ms
            );
            // WAL lets readers proceed while a writer holds the lock
            let options = options
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal);
            SqlitePoolOptions::new()
                .max_connections(config.max_connections)
                .connect_with(options)
                .await?
        };

        let database = Self { pool };
        database.init_schema().await?;

        Ok(database)
    }

    /// Fresh, empty in-memory database with the schema applied
    pub async fn in_memory() -> Result<Self> {
        Self::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            busy_timeout_ms: 5000,
        })
        .await
    }

    /// Borrow the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create all tables and indexes
    ///
    /// Safe to call multiple times (uses IF NOT EXISTS).
    async fn init_schema(&self) -> Result<()> {
        // Identities (owned by the auth collaborator)
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS user (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT NOT NULL UNIQUE,
                active BOOLEAN NOT NULL DEFAULT 1,
                fs_uniquifier TEXT NOT NULL UNIQUE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Staged exercises, not yet part of any workout
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS draft_exercise (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                sets INTEGER NOT NULL CHECK (sets > 0),
                reps INTEGER NOT NULL CHECK (reps > 0),
                weight REAL NOT NULL CHECK (weight >= 0),
                effort REAL NOT NULL CHECK (effort >= 0),
                user_id TEXT NOT NULL REFERENCES user(fs_uniquifier),
                pending_workout_name TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // One in-progress workout name per user
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS pending_workout (
                user_id TEXT PRIMARY KEY REFERENCES user(fs_uniquifier),
                name TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS workout (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                date TEXT NOT NULL,
                user_id TEXT NOT NULL REFERENCES user(fs_uniquifier)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS exercise (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                sets INTEGER NOT NULL CHECK (sets > 0),
                reps INTEGER NOT NULL CHECK (reps > 0),
                weight REAL NOT NULL CHECK (weight >= 0),
                effort REAL NOT NULL CHECK (effort >= 0),
                workout_id INTEGER NOT NULL REFERENCES workout(id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Create indexes for owner-scoped lookups
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_draft_exercise_user ON draft_exercise(user_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_workout_user ON workout(user_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_exercise_workout ON exercise(workout_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

fn memory_pool_options() -> SqlitePoolOptions {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
}
