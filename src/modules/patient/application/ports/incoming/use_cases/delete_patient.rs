use async_trait::async_trait;

use crate::auth::application::domain::entities::{AccessDenied, Actor};
use crate::modules::patient::application::domain::entities::PatientId;
use crate::modules::patient::application::ports::outgoing::PatientRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeletePatientError {
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),

    #[error("Patient not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PatientRepositoryError> for DeletePatientError {
    fn from(err: PatientRepositoryError) -> Self {
        match err {
            PatientRepositoryError::NotFound => DeletePatientError::NotFound,
            PatientRepositoryError::DatabaseError(msg) => DeletePatientError::RepositoryError(msg),
        }
    }
}

/// Immediate removal. Roles without the right must go through a deletion
/// request instead.
#[async_trait]
pub trait DeletePatientUseCase: Send + Sync {
    async fn execute(&self, actor: &Actor, id: PatientId) -> Result<(), DeletePatientError>;
}
