use async_trait::async_trait;

use crate::auth::application::domain::entities::{AccessDenied, Actor};
use crate::modules::deletion_request::application::domain::entities::{
    AlreadyDecided, DeletionRequest, DeletionRequestId, DeletionStatus,
};
use crate::modules::deletion_request::application::ports::outgoing::{
    DeletionRequestQueryError, DeletionRequestRepositoryError,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewDeletionError {
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),

    #[error("Deletion request not found")]
    NotFound,

    #[error("Request has already been {0}")]
    AlreadyDecided(DeletionStatus),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AlreadyDecided> for ReviewDeletionError {
    fn from(err: AlreadyDecided) -> Self {
        ReviewDeletionError::AlreadyDecided(err.0)
    }
}

impl From<DeletionRequestQueryError> for ReviewDeletionError {
    fn from(err: DeletionRequestQueryError) -> Self {
        ReviewDeletionError::RepositoryError(err.to_string())
    }
}

impl From<DeletionRequestRepositoryError> for ReviewDeletionError {
    fn from(err: DeletionRequestRepositoryError) -> Self {
        match err {
            DeletionRequestRepositoryError::NotFound => ReviewDeletionError::NotFound,
            DeletionRequestRepositoryError::AlreadyDecided(status) => {
                ReviewDeletionError::AlreadyDecided(status)
            }
            other => ReviewDeletionError::RepositoryError(other.to_string()),
        }
    }
}

/// Approving removes the patient together with the status change.
#[async_trait]
pub trait ApproveDeletionUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        id: DeletionRequestId,
    ) -> Result<DeletionRequest, ReviewDeletionError>;
}

#[async_trait]
pub trait DenyDeletionUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        id: DeletionRequestId,
    ) -> Result<DeletionRequest, ReviewDeletionError>;
}
