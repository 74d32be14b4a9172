use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use super::token_hasher::hash_token;
use crate::auth::application::domain::entities::Session;
use crate::auth::application::ports::incoming::use_cases::{LogoutError, LogoutUseCase};
use crate::auth::application::ports::outgoing::{
    SessionRevocationError, SessionRevocationRepository,
};
use crate::modules::audit::application::domain::entities::{AuditAction, NewAuditEntry};
use crate::modules::audit::application::ports::outgoing::AuditLogRepository;

pub struct LogoutService<A>
where
    A: AuditLogRepository,
{
    revocations: Arc<dyn SessionRevocationRepository>,
    audit_log: A,
}

impl<A> LogoutService<A>
where
    A: AuditLogRepository,
{
    pub fn new(revocations: Arc<dyn SessionRevocationRepository>, audit_log: A) -> Self {
        Self {
            revocations,
            audit_log,
        }
    }
}

#[async_trait]
impl<A> LogoutUseCase for LogoutService<A>
where
    A: AuditLogRepository + Send + Sync,
{
    async fn execute(&self, session: &Session) -> Result<(), LogoutError> {
        match self
            .revocations
            .revoke(hash_token(&session.token), session.actor.id, session.expires_at)
            .await
        {
            Ok(()) | Err(SessionRevocationError::AlreadyExpired) => {}
            Err(SessionRevocationError::StoreError(msg)) => {
                return Err(LogoutError::RevocationFailed(msg));
            }
        }

        self.audit_log
            .append(NewAuditEntry::by(
                &session.actor,
                AuditAction::Logout,
                "User logged out",
            ))
            .await
            .map_err(|e| LogoutError::RepositoryError(e.to_string()))?;

        info!(user_id = %session.actor.id, "User logged out");
        Ok(())
    }
}
