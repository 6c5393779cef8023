/// Login-required guard for handlers
///
/// The authentication front end (reverse proxy or login service) sets
/// `x-auth-user` to the caller's `fs_uniquifier` after it has verified the
/// session. Handlers that take `CurrentUser` only run for identities that
/// still resolve in the directory.

use crate::api::error::ApiError;
use crate::identity::{directory::IdentityStore, types::UserId};
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

/// Header carrying the authenticated identity
pub const AUTH_HEADER: &str = "x-auth-user";

/// The authenticated caller
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserId);

impl<S> FromRequestParts<S> for CurrentUser
where
    IdentityStore: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = match parts.headers.get(AUTH_HEADER).and_then(|v| v.to_str().ok()) {
            Some(token) if !token.trim().is_empty() => token.trim().to_string(),
            _ => {
                tracing::debug!("🔒 Request without identity header: {}", parts.uri.path());
                return Err(ApiError::Unauthorized);
            }
        };

        let identities = IdentityStore::from_ref(state);
        match identities.resolve(&token).await {
            Ok(Some(user)) => Ok(CurrentUser(user)),
            Ok(None) => {
                tracing::warn!("🔒 Unknown or inactive identity on {}", parts.uri.path());
                Err(ApiError::Unauthorized)
            }
            Err(e) => {
                tracing::error!("❌ Identity lookup failed: {}", e);
                Err(ApiError::Internal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Database;
    use axum::http::{Request, StatusCode};

    async fn parts_with(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(AUTH_HEADER, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn resolves_registered_identity() {
        let db = Database::in_memory().await.unwrap();
        let identities = IdentityStore::new(db.pool().clone());
        let user = identities.register("lifter@example.com").await.unwrap();

        let mut parts = parts_with(Some(user.as_str())).await;
        let CurrentUser(resolved) = CurrentUser::from_request_parts(&mut parts, &identities)
            .await
            .unwrap();

        assert_eq!(resolved, user);
    }

    #[tokio::test]
    async fn rejects_missing_and_unknown_identities() {
        let db = Database::in_memory().await.unwrap();
        let identities = IdentityStore::new(db.pool().clone());

        let mut missing = parts_with(None).await;
        let err = CurrentUser::from_request_parts(&mut missing, &identities)
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);

        let mut unknown = parts_with(Some("nobody")).await;
        let err = CurrentUser::from_request_parts(&mut unknown, &identities)
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }
}
