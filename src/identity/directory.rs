/// Identity directory backed by the `user` table
///
/// Stands in for the authentication collaborator's user datastore: it can
/// provision identities and resolve an authenticated token to a `UserId`.
/// Passwords, sessions and cookies live outside this crate.

use crate::identity::types::UserId;
use anyhow::Result;
use sqlx::sqlite::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct IdentityStore {
    pool: SqlitePool,
}

impl IdentityStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Provision an active identity with a fresh `fs_uniquifier`
    pub async fn register(&self, email: &str) -> Result<UserId> {
        let email = email.trim();
        if email.is_empty() {
            anyhow::bail!("email must not be empty");
        }

        let fs_uniquifier = Uuid::new_v4().to_string();
        sqlx::query("INSERT INTO user (email, active, fs_uniquifier) VALUES (?, 1, ?)")
            .bind(email)
            .bind(&fs_uniquifier)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to register identity '{}': {}", email, e))?;

        tracing::info!("👤 Registered identity: {}", email);

        Ok(UserId::new(fs_uniquifier))
    }

    /// Resolve an authenticated token to an active identity
    pub async fn resolve(&self, fs_uniquifier: &str) -> Result<Option<UserId>> {
        let found: Option<String> = sqlx::query_scalar(
            "SELECT fs_uniquifier FROM user WHERE fs_uniquifier = ? AND active = 1",
        )
        .bind(fs_uniquifier)
        .fetch_optional(&self.pool)
        .await?;

        Ok(found.map(UserId::new))
    }

    /// Mark an identity inactive; it stops resolving immediately
    #[cfg(test)]
    pub(crate) async fn deactivate(&self, user: &UserId) -> Result<bool> {
        let result = sqlx::query("UPDATE user SET active = 0 WHERE fs_uniquifier = ?")
            .bind(user.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Database;

    async fn identities() -> IdentityStore {
        let db = Database::in_memory().await.unwrap();
        IdentityStore::new(db.pool().clone())
    }

    #[tokio::test]
    async fn registered_identity_resolves() {
        let identities = identities().await;
        let user = identities.register("lifter@example.com").await.unwrap();

        let resolved = identities.resolve(user.as_str()).await.unwrap();
        assert_eq!(resolved, Some(user));
    }

    #[tokio::test]
    async fn unknown_token_does_not_resolve() {
        let identities = identities().await;
        identities.register("lifter@example.com").await.unwrap();

        assert_eq!(identities.resolve("not-a-user").await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let identities = identities().await;
        identities.register("lifter@example.com").await.unwrap();

        assert!(identities.register("lifter@example.com").await.is_err());
    }

    #[tokio::test]
    async fn deactivated_identity_stops_resolving() {
        let identities = identities().await;
        let user = identities.register("lifter@example.com").await.unwrap();

        assert!(identities.deactivate(&user).await.unwrap());
        assert_eq!(identities.resolve(user.as_str()).await.unwrap(), None);
    }
}
