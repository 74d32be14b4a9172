use async_trait::async_trait;

use crate::auth::application::domain::entities::{AccessDenied, Actor};
use crate::modules::deletion_request::application::domain::entities::DeletionRequest;
use crate::modules::deletion_request::application::ports::outgoing::DeletionRequestQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListPendingDeletionsError {
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<DeletionRequestQueryError> for ListPendingDeletionsError {
    fn from(err: DeletionRequestQueryError) -> Self {
        ListPendingDeletionsError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait ListPendingDeletionsUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        search: Option<String>,
    ) -> Result<Vec<DeletionRequest>, ListPendingDeletionsError>;
}
