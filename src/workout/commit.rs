/// Commit engine: promote staged drafts into a saved workout
///
/// The workout, its exercises and the removal of the consumed drafts are
/// written in one transaction. Any failure rolls the whole thing back and
/// leaves the drafts staged.

use crate::identity::UserId;
use crate::workout::{
    error::{Result, TrackerError},
    store::WorkoutStore,
    types::DraftExercise,
};
use chrono::{Local, NaiveDate};

impl WorkoutStore {
    /// Save the staged drafts as a workout dated today
    pub async fn commit_workout(&self, user: &UserId) -> Result<i64> {
        self.commit_workout_on(user, Local::now().date_naive()).await
    }

    /// Save the staged drafts as a workout on the given date
    ///
    /// Returns the new workout id.
    pub async fn commit_workout_on(&self, user: &UserId, date: NaiveDate) -> Result<i64> {
        let mut tx = self.begin_write().await?;

        let drafts = sqlx::query_as::<_, DraftExercise>(
            r#"
            SELECT id, name, sets, reps, weight, effort, pending_workout_name
            FROM draft_exercise
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user.as_str())
        .fetch_all(&mut *tx)
        .await?;

        let workout_name = shared_workout_name(&drafts)?;

        let workout_id = sqlx::query("INSERT INTO workout (name, date, user_id) VALUES (?, ?, ?)")
            .bind(&workout_name)
            .bind(date)
            .bind(user.as_str())
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        for draft in &drafts {
            sqlx::query(
                r#"
                INSERT INTO exercise (name, sets, reps, weight, effort, workout_id)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&draft.name)
            .bind(draft.sets)
            .bind(draft.reps)
            .bind(draft.weight)
            .bind(draft.effort)
            .bind(workout_id)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query("DELETE FROM draft_exercise WHERE user_id = ?")
            .bind(user.as_str())
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM pending_workout WHERE user_id = ?")
            .bind(user.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            "💾 Saved workout {} '{}' with {} exercises",
            workout_id,
            workout_name,
            drafts.len()
        );

        Ok(workout_id)
    }
}

/// The single workout name every staged draft was recorded under
fn shared_workout_name(drafts: &[DraftExercise]) -> Result<String> {
    let first = drafts.first().ok_or(TrackerError::NoDrafts)?;

    if let Some(stray) = drafts
        .iter()
        .find(|d| d.pending_workout_name != first.pending_workout_name)
    {
        tracing::error!(
            "❌ Staged drafts disagree on workout name: '{}' vs '{}'",
            first.pending_workout_name,
            stray.pending_workout_name
        );
        return Err(TrackerError::Validation(
            "staged exercises belong to different workouts; set the workout name again".to_string(),
        ));
    }

    Ok(first.pending_workout_name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::store::test_support::{draft, store_with_two_users};
    use crate::workout::volume::compute_volume;

    #[tokio::test]
    async fn leg_day_scenario() {
        let (store, alice, _) = store_with_two_users().await;

        store
            .add_draft(&alice, draft("Squat", 5, 5, 100.0, 8.0, "Leg Day"))
            .await
            .unwrap();
        store
            .add_draft(&alice, draft("Bench", 3, 8, 60.0, 7.0, "Leg Day"))
            .await
            .unwrap();

        let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let id = store.commit_workout_on(&alice, day).await.unwrap();

        let workouts = store.list_workouts(&alice).await.unwrap();
        assert_eq!(workouts.len(), 1);
        assert_eq!(workouts[0].id, id);
        assert_eq!(workouts[0].name, "Leg Day");
        assert_eq!(workouts[0].date, day);

        let detail = store.get_workout_detail(&alice, id).await.unwrap();
        assert_eq!(detail.exercises.len(), 2);
        assert_eq!(compute_volume(&detail.exercises), 3940.0);
        assert_eq!(detail.total_volume, 3940.0);

        assert!(store.list_drafts(&alice).await.unwrap().is_empty());
        assert_eq!(store.pending_workout_name(&alice).await.unwrap(), None);
    }

    #[tokio::test]
    async fn committed_exercises_match_the_drafts() {
        let (store, alice, _) = store_with_two_users().await;

        for (name, sets, reps, weight, effort) in [
            ("Deadlift", 1, 5, 180.0, 9.0),
            ("Row", 4, 10, 70.5, 7.5),
            ("Curl", 3, 12, 0.0, 6.0),
        ] {
            store
                .add_draft(&alice, draft(name, sets, reps, weight, effort, "Pull"))
                .await
                .unwrap();
        }

        let mut staged: Vec<_> = store
            .list_drafts(&alice)
            .await
            .unwrap()
            .into_iter()
            .map(|d| (d.name, d.sets, d.reps, d.weight, d.effort))
            .collect();

        let day_before = Local::now().date_naive();
        let id = store.commit_workout(&alice).await.unwrap();
        let day_after = Local::now().date_naive();
        let detail = store.get_workout_detail(&alice, id).await.unwrap();
        let saved_on = detail.workout.date;

        let mut saved: Vec<_> = detail
            .exercises
            .into_iter()
            .map(|e| {
                assert_eq!(e.workout_id, id);
                (e.name, e.sets, e.reps, e.weight, e.effort)
            })
            .collect();

        staged.sort_by(|a, b| a.0.cmp(&b.0));
        saved.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(saved, staged);
        assert!(saved_on == day_before || saved_on == day_after);
    }

    #[tokio::test]
    async fn commit_without_drafts_changes_nothing() {
        let (store, alice, _) = store_with_two_users().await;

        let err = store.commit_workout(&alice).await.unwrap_err();
        assert!(matches!(err, TrackerError::NoDrafts));
        assert!(store.list_workouts(&alice).await.unwrap().is_empty());

        // A pending name alone is not enough to save
        store.set_pending_workout_name(&alice, "Leg Day").await.unwrap();
        let err = store.commit_workout(&alice).await.unwrap_err();
        assert!(matches!(err, TrackerError::NoDrafts));
        assert!(store.list_workouts(&alice).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn commit_only_consumes_the_callers_drafts() {
        let (store, alice, bob) = store_with_two_users().await;

        store
            .add_draft(&alice, draft("Squat", 5, 5, 100.0, 8.0, "Leg Day"))
            .await
            .unwrap();
        store
            .add_draft(&bob, draft("Bench", 3, 8, 60.0, 7.0, "Push"))
            .await
            .unwrap();

        store.commit_workout(&alice).await.unwrap();

        assert!(store.list_workouts(&bob).await.unwrap().is_empty());
        assert_eq!(store.list_drafts(&bob).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failed_exercise_insert_rolls_back_everything() {
        let (store, alice, _) = store_with_two_users().await;

        sqlx::query(
            r#"
            CREATE TRIGGER reject_boom BEFORE INSERT ON exercise
            WHEN NEW.name = 'Boom'
            BEGIN
                SELECT RAISE(ABORT, 'boom');
            END
            "#,
        )
        .execute(&store.pool)
        .await
        .unwrap();

        store
            .add_draft(&alice, draft("Squat", 5, 5, 100.0, 8.0, "Leg Day"))
            .await
            .unwrap();
        store
            .add_draft(&alice, draft("Boom", 1, 1, 1.0, 1.0, "Leg Day"))
            .await
            .unwrap();

        let err = store.commit_workout(&alice).await.unwrap_err();
        assert!(matches!(err, TrackerError::Database(_)));

        assert!(store.list_workouts(&alice).await.unwrap().is_empty());
        assert_eq!(store.list_drafts(&alice).await.unwrap().len(), 2);
        let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exercise")
            .fetch_one(&store.pool)
            .await
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[tokio::test]
    async fn drafts_with_mixed_names_are_refused() {
        let (store, alice, _) = store_with_two_users().await;

        store
            .add_draft(&alice, draft("Squat", 5, 5, 100.0, 8.0, "Leg Day"))
            .await
            .unwrap();
        // Bypass the accumulator to break the shared-name invariant
        sqlx::query(
            r#"
            INSERT INTO draft_exercise (name, sets, reps, weight, effort, user_id, pending_workout_name)
            VALUES ('Bench', 3, 8, 60.0, 7.0, ?, 'Push')
            "#,
        )
        .bind(alice.as_str())
        .execute(&store.pool)
        .await
        .unwrap();

        let err = store.commit_workout(&alice).await.unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));
        assert!(store.list_workouts(&alice).await.unwrap().is_empty());
        assert_eq!(store.list_drafts(&alice).await.unwrap().len(), 2);
    }
}
