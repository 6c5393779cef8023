/// Mapping from core errors to HTTP responses
///
/// Every failure renders as a flash-style notice:
/// `{ "message": "...", "category": "danger" }`.
/// That covers core errors, malformed request bodies or paths, and the
/// login guard.

use crate::workout::TrackerError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

/// Handler error
#[derive(Debug)]
pub enum ApiError {
    /// Failure from the workout core
    Tracker(TrackerError),
    /// Request could not be decoded (body, path)
    Malformed(StatusCode, String),
    /// No authenticated identity
    Unauthorized,
    /// Infrastructure failure outside the workout core
    Internal,
}

impl From<TrackerError> for ApiError {
    fn from(err: TrackerError) -> Self {
        Self::Tracker(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Malformed(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Malformed(rejection.status(), rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Tracker(TrackerError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Tracker(TrackerError::NoDrafts) => StatusCode::CONFLICT,
            Self::Tracker(TrackerError::NotFound) => StatusCode::NOT_FOUND,
            Self::Tracker(TrackerError::Database(_)) | Self::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Malformed(status, _) => *status,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Tracker(TrackerError::Database(e)) => {
                tracing::error!("❌ Database failure while handling request: {}", e);
                "Something went wrong, please try again.".to_string()
            }
            Self::Tracker(other) => other.to_string(),
            Self::Malformed(_, detail) => format!("Invalid request: {detail}"),
            Self::Unauthorized => "Please log in to access this page.".to_string(),
            Self::Internal => "Something went wrong, please try again.".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if !status.is_server_error() {
            tracing::debug!("⚠️ Request rejected ({}): {}", status, message);
        }

        (status, Json(json!({ "message": message, "category": "danger" }))).into_response()
    }
}

/// Success notice in the same shape as failures
pub fn notice(message: &str) -> Json<serde_json::Value> {
    Json(json!({ "message": message, "category": "success" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(
            ApiError::from(TrackerError::Validation("bad".into())).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::from(TrackerError::NoDrafts).status(), StatusCode::CONFLICT);
        assert_eq!(ApiError::from(TrackerError::NotFound).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(TrackerError::Database(sqlx::Error::RowNotFound)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Malformed(StatusCode::BAD_REQUEST, "bad path".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn every_error_renders_a_danger_notice() {
        for err in [
            ApiError::Unauthorized,
            ApiError::Internal,
            ApiError::Malformed(StatusCode::UNPROCESSABLE_ENTITY, "sets: invalid type".into()),
            ApiError::from(TrackerError::NotFound),
        ] {
            let response = err.into_response();
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

            assert_eq!(body["category"], "danger");
            assert!(body["message"].is_string());
        }
    }
}
