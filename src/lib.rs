/// liftlog: personal workout tracking service
///
/// Users stage exercises into a workout in progress, save it as a
/// permanent record, and review past workouts with their training volume.

// Core configuration and setup
pub mod config;

// SQLite pool and schema
pub mod store;

// Authenticated identity lookup and login guard
pub mod identity;

// Staging, commit, reporting and deletion of workouts
pub mod workout;

// HTTP API layer
pub mod api;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use identity::{CurrentUser, IdentityStore, UserId};
pub use server::{create_app, start_server};
pub use store::Database;
pub use workout::{compute_volume, TrackerError, WorkoutStore};
