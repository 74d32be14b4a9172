use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::session_revocation::{
    SessionRevocationError, SessionRevocationRepository,
};

/// Process-local revocation list, used when no Redis is configured.
/// Expired entries are pruned on every revocation.
#[derive(Default)]
pub struct InMemorySessionRevocationRepository {
    revoked: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl InMemorySessionRevocationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRevocationRepository for InMemorySessionRevocationRepository {
    async fn revoke(
        &self,
        token_hash: String,
        _user_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionRevocationError> {
        let now = Utc::now();
        if expires_at <= now {
            return Err(SessionRevocationError::AlreadyExpired);
        }

        let mut revoked = self.revoked.write().await;
        revoked.retain(|_, until| *until > now);
        revoked.insert(token_hash, expires_at);
        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, SessionRevocationError> {
        let revoked = self.revoked.read().await;
        Ok(revoked
            .get(token_hash)
            .is_some_and(|until| *until > Utc::now()))
    }
}
