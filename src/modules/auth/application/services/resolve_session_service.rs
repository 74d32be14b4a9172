use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use super::token_hasher::hash_token;
use crate::auth::application::domain::entities::Session;
use crate::auth::application::ports::incoming::use_cases::{
    ResolveSessionError, ResolveSessionUseCase,
};
use crate::auth::application::ports::outgoing::{
    SessionRevocationRepository, TokenProvider, UserQuery,
};

pub struct ResolveSessionService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
    token_provider: Arc<dyn TokenProvider>,
    revocations: Arc<dyn SessionRevocationRepository>,
}

impl<Q> ResolveSessionService<Q>
where
    Q: UserQuery,
{
    pub fn new(
        user_query: Q,
        token_provider: Arc<dyn TokenProvider>,
        revocations: Arc<dyn SessionRevocationRepository>,
    ) -> Self {
        Self {
            user_query,
            token_provider,
            revocations,
        }
    }
}

#[async_trait]
impl<Q> ResolveSessionUseCase for ResolveSessionService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<Session, ResolveSessionError> {
        let claims = self.token_provider.verify_session(token).map_err(|e| {
            debug!(error = %e, "Session token rejected");
            ResolveSessionError::InvalidSession
        })?;

        let revoked = self
            .revocations
            .is_revoked(&hash_token(token))
            .await
            .map_err(|e| ResolveSessionError::RepositoryError(e.to_string()))?;

        if revoked {
            warn!(user_id = claims.sub, "Revoked session presented");
            return Err(ResolveSessionError::InvalidSession);
        }

        let user = self
            .user_query
            .find_by_id(claims.user_id())
            .await
            .map_err(|e| ResolveSessionError::RepositoryError(e.to_string()))?
            .ok_or(ResolveSessionError::InvalidSession)?;

        if !user.is_active {
            return Err(ResolveSessionError::AccountInactive);
        }

        Ok(Session {
            actor: user.to_actor(),
            token: token.to_string(),
            expires_at: claims.expires_at(),
            csrf_token: claims.csrf,
        })
    }
}
