/// In-progress workout endpoints
///
/// The index view plus the routes that stage, rename and clear drafts.

use crate::{
    api::{
        error::{notice, ApiError},
        AppState,
    },
    identity::CurrentUser,
    workout::{compute_volume, DraftInput},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

/// Request body for starting a new workout
#[derive(Debug, Deserialize)]
pub struct SetWorkoutNameRequest {
    pub workout_name: String,
}

/// Create draft management routes
pub fn create_draft_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/add-exercise", post(add_exercise))
        .route("/set_workout_name", post(set_workout_name))
        .route("/clear-drafts", post(clear_drafts))
}

/// Workout in progress and saved history
///
/// GET /
/// Returns: { "workout_name": ..., "drafts": [...], "total_volume": ..., "workouts": [...] }
async fn index(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Value>, ApiError> {
    let drafts = state.store.list_drafts(&user).await?;
    let workouts = state.store.list_workouts(&user).await?;
    let workout_name = state.store.pending_workout_name(&user).await?;
    let total_volume = compute_volume(&drafts);

    Ok(Json(json!({
        "workout_name": workout_name,
        "drafts": drafts,
        "total_volume": total_volume,
        "workouts": workouts,
    })))
}

/// Stage an exercise
///
/// POST /add-exercise
/// Body: { "name": "Squat", "sets": 5, "reps": 5, "weight": 100.0, "effort": 8.0, "workout_name": "Leg Day" }
async fn add_exercise(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<DraftInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(input) = payload?;
    let workout_name = state.store.add_draft(&user, input).await?;

    Ok((StatusCode::CREATED, Json(json!({ "workout_name": workout_name }))))
}

/// Start a new workout, discarding unsaved drafts
///
/// POST /set_workout_name
/// Body: { "workout_name": "Push Day" }
async fn set_workout_name(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<SetWorkoutNameRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(payload) = payload?;
    let discarded = state
        .store
        .set_pending_workout_name(&user, &payload.workout_name)
        .await?;

    Ok(Json(json!({
        "workout_name": payload.workout_name.trim(),
        "discarded": discarded,
    })))
}

/// Drop every staged exercise, keeping the workout name
///
/// POST /clear-drafts
async fn clear_drafts(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Value>, ApiError> {
    let removed = state.store.clear_drafts(&user).await?;
    tracing::debug!("🧹 Cleared {} drafts", removed);

    Ok(notice("Exercises cleared."))
}
