use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionRevocationError {
    #[error("Session already expired")]
    AlreadyExpired,

    #[error("Revocation store error: {0}")]
    StoreError(String),
}

/// Revoked sessions, keyed by the SHA-256 of the token. Entries only need
/// to live until the token would have expired anyway.
#[async_trait]
pub trait SessionRevocationRepository: Send + Sync {
    async fn revoke(
        &self,
        token_hash: String,
        user_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionRevocationError>;

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, SessionRevocationError>;
}
