/// Deletion workflow for saved workouts
///
/// The schema does not cascade: exercises are deleted explicitly, in the
/// same transaction as their workout.

use crate::identity::UserId;
use crate::workout::{
    error::{Result, TrackerError},
    store::WorkoutStore,
};

impl WorkoutStore {
    /// Delete one of the user's workouts together with its exercises
    pub async fn delete_workout(&self, user: &UserId, workout_id: i64) -> Result<()> {
        let mut tx = self.begin_write().await?;

        let owned: Option<i64> =
            sqlx::query_scalar("SELECT id FROM workout WHERE id = ? AND user_id = ?")
                .bind(workout_id)
                .bind(user.as_str())
                .fetch_optional(&mut *tx)
                .await?;

        if owned.is_none() {
            return Err(TrackerError::NotFound);
        }

        let exercises = sqlx::query("DELETE FROM exercise WHERE workout_id = ?")
            .bind(workout_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM workout WHERE id = ? AND user_id = ?")
            .bind(workout_id)
            .bind(user.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!("🗑️ Deleted workout {} and {} exercises", workout_id, exercises);

        Ok(())
    }
}
