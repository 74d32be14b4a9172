use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::session_revocation::{
    SessionRevocationError, SessionRevocationRepository,
};

/// Redis-backed revocation list.
///
/// ```text
/// clinic:revoked:{token_hash} -> "{user_id}"   (TTL = remaining token lifetime)
/// ```
///
/// Key expiry is the only cleanup.
#[derive(Clone)]
pub struct RedisSessionRevocationRepository {
    pool: Arc<Pool>,
}

impl RedisSessionRevocationRepository {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn key(token_hash: &str) -> String {
        format!("clinic:revoked:{token_hash}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, SessionRevocationError> {
        self.pool
            .get()
            .await
            .map_err(|e| SessionRevocationError::StoreError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl SessionRevocationRepository for RedisSessionRevocationRepository {
    async fn revoke(
        &self,
        token_hash: String,
        user_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionRevocationError> {
        let ttl = (expires_at - Utc::now()).num_seconds();
        if ttl <= 0 {
            return Err(SessionRevocationError::AlreadyExpired);
        }

        let key = Self::key(&token_hash);
        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::pipe()
            .atomic()
            .cmd("SET")
            .arg(&key)
            .arg(user_id.to_string())
            .ignore()
            .cmd("EXPIRE")
            .arg(&key)
            .arg(ttl)
            .ignore()
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|e| SessionRevocationError::StoreError(e.to_string()))?;

        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, SessionRevocationError> {
        let mut conn = self.get_conn().await?;

        conn.exists(Self::key(token_hash))
            .await
            .map_err(|e| SessionRevocationError::StoreError(e.to_string()))
    }
}
