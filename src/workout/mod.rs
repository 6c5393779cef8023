/// Workout tracking core
///
/// This module holds the staging-and-commit workflow:
/// - Record types (DraftExercise, Workout, Exercise) and input validation
/// - Draft accumulation under a per-user pending workout name
/// - Atomic commit of drafts into a saved workout
/// - Owner-scoped listing, detail and deletion
/// - Training volume computation

pub mod accumulator;
pub mod commit;
pub mod deletion;
pub mod error;
pub mod reporting;
pub mod store;
pub mod types;
pub mod volume;

// Re-export commonly used types
pub use error::{Result, TrackerError};
pub use store::WorkoutStore;
pub use types::{DraftExercise, DraftInput, Exercise, Workout, WorkoutDetail};
pub use volume::{compute_volume, TrainingLoad};
