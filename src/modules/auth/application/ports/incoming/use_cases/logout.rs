use async_trait::async_trait;

use crate::auth::application::domain::entities::Session;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogoutError {
    #[error("Failed to revoke session: {0}")]
    RevocationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self, session: &Session) -> Result<(), LogoutError>;
}
