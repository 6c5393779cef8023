/// HTTP API Layer
///
/// Thin handlers over the workout core. Every route except the health
/// check runs behind the `CurrentUser` guard.

// Index view and draft staging endpoints
pub mod drafts;

// Save, list, detail and delete endpoints
pub mod workouts;

// Core error to HTTP response mapping
pub mod error;

use crate::{identity::IdentityStore, workout::WorkoutStore};
use axum::{extract::FromRef, routing::get, Router};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Owner-scoped workout operations
    pub store: WorkoutStore,
    /// Identity lookups for the login guard
    pub identities: IdentityStore,
}

impl FromRef<AppState> for IdentityStore {
    fn from_ref(state: &AppState) -> Self {
        state.identities.clone()
    }
}

/// Build the full router over the given state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .merge(drafts::create_draft_routes())
        .merge(workouts::create_workout_routes())
        .with_state(state)
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
