/// Workout record definitions
///
/// Rows are read with `sqlx::FromRow` and serialized straight into API
/// responses. Owner columns are never selected into these structs: the
/// owner is always the caller.

use crate::workout::error::{Result, TrackerError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Longest accepted exercise or workout name
pub const MAX_NAME_LEN: usize = 100;

/// A staged exercise that is not part of any workout yet
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct DraftExercise {
    pub id: i64,
    pub name: String,
    pub sets: i64,
    pub reps: i64,
    pub weight: f64,
    /// Rating of perceived exertion
    pub effort: f64,
    pub pending_workout_name: String,
}

/// A saved workout
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Workout {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
}

/// An exercise belonging to a saved workout
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub sets: i64,
    pub reps: i64,
    pub weight: f64,
    pub effort: f64,
    pub workout_id: i64,
}

/// A workout with its exercises and total training volume
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutDetail {
    #[serde(flatten)]
    pub workout: Workout,
    pub exercises: Vec<Exercise>,
    pub total_volume: f64,
}

/// Request to stage one exercise
///
/// Field aliases accept the names of the original HTML form
/// (`exercise`, `rpe`).
#[derive(Debug, Clone, Deserialize)]
pub struct DraftInput {
    #[serde(alias = "exercise")]
    pub name: String,
    pub sets: i64,
    pub reps: i64,
    pub weight: f64,
    #[serde(alias = "rpe")]
    pub effort: f64,
    pub workout_name: String,
}

impl DraftInput {
    /// Check ranges and return the input with trimmed names
    pub fn validated(self) -> Result<Self> {
        let name = validate_name("exercise name", &self.name)?;
        let workout_name = validate_name("workout name", &self.workout_name)?;

        if self.sets <= 0 {
            return Err(TrackerError::Validation(format!(
                "sets must be a positive integer, got {}",
                self.sets
            )));
        }
        if self.reps <= 0 {
            return Err(TrackerError::Validation(format!(
                "reps must be a positive integer, got {}",
                self.reps
            )));
        }
        validate_non_negative("weight", self.weight)?;
        validate_non_negative("effort", self.effort)?;

        Ok(Self {
            name,
            workout_name,
            ..self
        })
    }
}

/// Trim a display name and enforce the column limits
pub fn validate_name(field: &str, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::Validation(format!("{field} must not be empty")));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(TrackerError::Validation(format!(
            "{field} must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

fn validate_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TrackerError::Validation(format!(
            "{field} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}
