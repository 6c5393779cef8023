/// Listing and detail queries over saved workouts

use crate::identity::UserId;
use crate::workout::{
    error::{Result, TrackerError},
    store::WorkoutStore,
    types::{Exercise, Workout, WorkoutDetail},
    volume::compute_volume,
};

impl WorkoutStore {
    /// All saved workouts for the user, newest first
    pub async fn list_workouts(&self, user: &UserId) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(
            "SELECT id, name, date FROM workout WHERE user_id = ? ORDER BY date DESC, id DESC",
        )
        .bind(user.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(workouts)
    }

    /// One workout with its exercises and total volume
    ///
    /// A workout owned by someone else is reported exactly like a missing one.
    pub async fn get_workout_detail(&self, user: &UserId, workout_id: i64) -> Result<WorkoutDetail> {
        let workout = sqlx::query_as::<_, Workout>(
            "SELECT id, name, date FROM workout WHERE id = ? AND user_id = ?",
        )
        .bind(workout_id)
        .bind(user.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(TrackerError::NotFound)?;

        let exercises = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, name, sets, reps, weight, effort, workout_id
            FROM exercise
            WHERE workout_id = ?
            ORDER BY id
            "#,
        )
        .bind(workout.id)
        .fetch_all(&self.pool)
        .await?;

        let total_volume = compute_volume(&exercises);

        Ok(WorkoutDetail {
            workout,
            exercises,
            total_volume,
        })
    }
}
