/// Saved workout endpoints
///
/// Commit the staged drafts, browse history, and delete workouts.

use crate::{
    api::{
        error::{notice, ApiError},
        AppState,
    },
    identity::CurrentUser,
    workout::WorkoutDetail,
};
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};

/// Create saved workout routes
pub fn create_workout_routes() -> Router<AppState> {
    Router::new()
        .route("/save-workout", post(save_workout))
        .route("/workout_list", get(workout_list))
        .route("/workout/{id}", get(workout_detail))
        .route("/delete-workout/{id}", post(delete_workout))
}

/// Save the staged drafts as a workout
///
/// POST /save-workout
/// Returns: { "id": 7, "message": "Workout saved successfully!", "category": "success" }
async fn save_workout(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let id = state.store.commit_workout(&user).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "id": id,
            "message": "Workout saved successfully!",
            "category": "success",
        })),
    ))
}

/// List saved workouts
///
/// GET /workout_list
/// Returns: { "workouts": [{ "id": ..., "name": "...", "date": "YYYY-MM-DD" }] }
async fn workout_list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Value>, ApiError> {
    let workouts = state.store.list_workouts(&user).await?;

    Ok(Json(json!({ "workouts": workouts })))
}

/// One workout with exercises and total volume
///
/// GET /workout/{id}
async fn workout_detail(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<WorkoutDetail>, ApiError> {
    let Path(id) = id?;
    let detail = state.store.get_workout_detail(&user, id).await?;

    Ok(Json(detail))
}

/// Delete a workout and its exercises
///
/// POST /delete-workout/{id}
async fn delete_workout(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(id) = id?;
    state.store.delete_workout(&user, id).await?;

    Ok(notice("Workout deleted successfully!"))
}
