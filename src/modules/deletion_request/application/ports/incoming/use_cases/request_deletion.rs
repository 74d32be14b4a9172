use async_trait::async_trait;

use crate::auth::application::domain::entities::{AccessDenied, Actor};
use crate::modules::deletion_request::application::domain::entities::DeletionRequest;
use crate::modules::deletion_request::application::ports::outgoing::{
    DeletionRequestQueryError, DeletionRequestRepositoryError,
};
use crate::modules::patient::application::domain::entities::PatientId;
use crate::modules::patient::application::ports::outgoing::PatientQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestDeletionError {
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),

    #[error("Patient not found")]
    PatientNotFound,

    #[error("A deletion request for this patient already exists")]
    AlreadyRequested,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PatientQueryError> for RequestDeletionError {
    fn from(err: PatientQueryError) -> Self {
        RequestDeletionError::RepositoryError(err.to_string())
    }
}

impl From<DeletionRequestQueryError> for RequestDeletionError {
    fn from(err: DeletionRequestQueryError) -> Self {
        RequestDeletionError::RepositoryError(err.to_string())
    }
}

impl From<DeletionRequestRepositoryError> for RequestDeletionError {
    fn from(err: DeletionRequestRepositoryError) -> Self {
        match err {
            DeletionRequestRepositoryError::AlreadyRequested => {
                RequestDeletionError::AlreadyRequested
            }
            other => RequestDeletionError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait RequestDeletionUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        patient_id: PatientId,
    ) -> Result<DeletionRequest, RequestDeletionError>;
}
