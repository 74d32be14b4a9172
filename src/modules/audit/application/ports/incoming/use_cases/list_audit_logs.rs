use async_trait::async_trait;

use crate::auth::application::domain::entities::{Actor, UserId};
use crate::modules::audit::application::domain::entities::{AuditAction, AuditEntry};
use crate::modules::audit::application::ports::outgoing::AuditLogRepositoryError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAuditLogsQuery {
    pub user_id: Option<UserId>,
    pub action: Option<AuditAction>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListAuditLogsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AuditLogRepositoryError> for ListAuditLogsError {
    fn from(err: AuditLogRepositoryError) -> Self {
        match err {
            AuditLogRepositoryError::DatabaseError(msg) => ListAuditLogsError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait ListAuditLogsUseCase: Send + Sync {
    /// Actors who may not see the whole trail only ever get their own entries.
    async fn execute(
        &self,
        actor: &Actor,
        query: ListAuditLogsQuery,
    ) -> Result<Vec<AuditEntry>, ListAuditLogsError>;
}
