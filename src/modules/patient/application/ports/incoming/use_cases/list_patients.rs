use async_trait::async_trait;

use crate::auth::application::domain::entities::Actor;
use crate::modules::patient::application::domain::entities::PatientView;
use crate::modules::patient::application::ports::outgoing::{PatientListFilter, PatientQueryError};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListPatientsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PatientQueryError> for ListPatientsError {
    fn from(err: PatientQueryError) -> Self {
        ListPatientsError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait ListPatientsUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        filter: PatientListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PatientView>, ListPatientsError>;
}
