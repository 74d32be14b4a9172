use async_trait::async_trait;

use crate::auth::application::domain::entities::Actor;
use crate::modules::patient::application::domain::entities::{
    PatientId, PatientInput, PatientValidationError, PatientView,
};
use crate::modules::patient::application::ports::outgoing::PatientRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdatePatientError {
    #[error(transparent)]
    Validation(#[from] PatientValidationError),

    #[error("Patient not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PatientRepositoryError> for UpdatePatientError {
    fn from(err: PatientRepositoryError) -> Self {
        match err {
            PatientRepositoryError::NotFound => UpdatePatientError::NotFound,
            PatientRepositoryError::DatabaseError(msg) => UpdatePatientError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait UpdatePatientUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        id: PatientId,
        input: PatientInput,
    ) -> Result<PatientView, UpdatePatientError>;
}
