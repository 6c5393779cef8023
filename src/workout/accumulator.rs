/// Draft accumulator
///
/// Each user has at most one workout in progress: a pending name plus the
/// exercises staged under it. Starting a new workout name discards whatever
/// was staged before. Drafts never mix workout names.

use crate::identity::UserId;
use crate::workout::{
    error::{Result, TrackerError},
    store::WorkoutStore,
    types::{validate_name, DraftExercise, DraftInput},
};
use sqlx::{Sqlite, Transaction};

impl WorkoutStore {
    /// Stage one exercise under the given workout name
    ///
    /// Persists immediately. Returns the pending workout name so callers can
    /// route back to the in-progress workout.
    pub async fn add_draft(&self, user: &UserId, input: DraftInput) -> Result<String> {
        let input = input.validated()?;

        let mut tx = self.begin_write().await?;

        let pending: Option<String> =
            sqlx::query_scalar("SELECT name FROM pending_workout WHERE user_id = ?")
                .bind(user.as_str())
                .fetch_optional(&mut *tx)
                .await?;

        if let Some(current) = pending.filter(|name| *name != input.workout_name) {
            let staged: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM draft_exercise WHERE user_id = ?")
                    .bind(user.as_str())
                    .fetch_one(&mut *tx)
                    .await?;

            if staged > 0 {
                return Err(TrackerError::Validation(format!(
                    "workout '{}' is not the workout in progress ('{}'); set a new workout name first",
                    input.workout_name, current
                )));
            }
        }

        upsert_pending_name(&mut tx, user, &input.workout_name).await?;

        sqlx::query(
            r#"
            INSERT INTO draft_exercise (name, sets, reps, weight, effort, user_id, pending_workout_name)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.name)
        .bind(input.sets)
        .bind(input.reps)
        .bind(input.weight)
        .bind(input.effort)
        .bind(user.as_str())
        .bind(&input.workout_name)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            "📝 Staged {} {}x{} @ {} for '{}'",
            input.name,
            input.sets,
            input.reps,
            input.weight,
            input.workout_name
        );

        Ok(input.workout_name)
    }

    /// Delete every staged exercise for the user
    ///
    /// Idempotent; returns the number of drafts removed.
    pub async fn clear_drafts(&self, user: &UserId) -> Result<u64> {
        let result = sqlx::query("DELETE FROM draft_exercise WHERE user_id = ?")
            .bind(user.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Start a new workout: discard staged drafts and record the new name
    ///
    /// Returns how many unsaved drafts were discarded.
    pub async fn set_pending_workout_name(&self, user: &UserId, name: &str) -> Result<u64> {
        let name = validate_name("workout name", name)?;

        let mut tx = self.begin_write().await?;

        let discarded = sqlx::query("DELETE FROM draft_exercise WHERE user_id = ?")
            .bind(user.as_str())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        upsert_pending_name(&mut tx, user, &name).await?;

        tx.commit().await?;

        if discarded > 0 {
            tracing::info!("🧹 Started workout '{}', discarded {} unsaved drafts", name, discarded);
        }

        Ok(discarded)
    }

    /// Name of the workout in progress, if any
    pub async fn pending_workout_name(&self, user: &UserId) -> Result<Option<String>> {
        let name = sqlx::query_scalar("SELECT name FROM pending_workout WHERE user_id = ?")
            .bind(user.as_str())
            .fetch_optional(&self.pool)
            .await?;

        Ok(name)
    }

    /// All staged exercises for the user, in insertion order
    pub async fn list_drafts(&self, user: &UserId) -> Result<Vec<DraftExercise>> {
        let drafts = sqlx::query_as::<_, DraftExercise>(
            r#"
            SELECT id, name, sets, reps, weight, effort, pending_workout_name
            FROM draft_exercise
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(drafts)
    }
}

async fn upsert_pending_name(
    tx: &mut Transaction<'_, Sqlite>,
    user: &UserId,
    name: &str,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO pending_workout (user_id, name)
        VALUES (?, ?)
        ON CONFLICT(user_id) DO UPDATE SET name = excluded.name
        "#,
    )
    .bind(user.as_str())
    .bind(name)
    .execute(&mut **tx)
    .await?;

    Ok(())
}
