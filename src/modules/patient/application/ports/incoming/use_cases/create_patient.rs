use async_trait::async_trait;

use crate::auth::application::domain::entities::Actor;
use crate::modules::patient::application::domain::entities::{
    PatientInput, PatientValidationError, PatientView,
};
use crate::modules::patient::application::ports::outgoing::PatientRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreatePatientError {
    #[error(transparent)]
    Validation(#[from] PatientValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PatientRepositoryError> for CreatePatientError {
    fn from(err: PatientRepositoryError) -> Self {
        CreatePatientError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait CreatePatientUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        input: PatientInput,
    ) -> Result<PatientView, CreatePatientError>;
}
