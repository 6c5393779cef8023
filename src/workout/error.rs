//! Error types for workout tracking operations

use thiserror::Error;

/// Result type for workout tracking operations
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Failures surfaced by the staging, commit, reporting and deletion paths
///
/// None of these leave partial writes behind: every multi-statement
/// operation runs in a single transaction.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Malformed or out-of-range input
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Commit attempted with nothing staged
    #[error("Add at least one exercise before saving!")]
    NoDrafts,

    /// Workout does not exist or belongs to someone else
    #[error("Workout not found!")]
    NotFound,

    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
