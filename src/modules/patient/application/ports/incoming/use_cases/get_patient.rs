use async_trait::async_trait;

use crate::auth::application::domain::entities::Actor;
use crate::modules::patient::application::domain::entities::{PatientId, PatientView};
use crate::modules::patient::application::ports::outgoing::PatientQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetPatientError {
    #[error("Patient not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PatientQueryError> for GetPatientError {
    fn from(err: PatientQueryError) -> Self {
        GetPatientError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait GetPatientUseCase: Send + Sync {
    async fn execute(&self, actor: &Actor, id: PatientId) -> Result<PatientView, GetPatientError>;
}
