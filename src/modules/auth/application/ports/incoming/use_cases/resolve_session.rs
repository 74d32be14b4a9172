use async_trait::async_trait;

use crate::auth::application::domain::entities::Session;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveSessionError {
    /// Bad signature, expired, revoked, or the account no longer exists.
    #[error("Session is invalid or has expired")]
    InvalidSession,

    #[error("Account has been deactivated")]
    AccountInactive,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Turns a session cookie into the acting identity for one request.
#[async_trait]
pub trait ResolveSessionUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<Session, ResolveSessionError>;
}
