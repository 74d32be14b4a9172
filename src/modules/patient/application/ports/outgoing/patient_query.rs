use async_trait::async_trait;

use crate::modules::patient::application::domain::entities::{Patient, PatientId};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientListFilter {
    /// Substring of first name, last name or phone; a numeric term also
    /// matches the id exactly.
    pub search: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatientQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PatientQuery: Send + Sync {
    async fn find_by_id(&self, id: PatientId) -> Result<Option<Patient>, PatientQueryError>;

    /// Newest id first.
    async fn list(
        &self,
        filter: &PatientListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Patient>, PatientQueryError>;

    async fn count(&self) -> Result<u64, PatientQueryError>;

    async fn recent(&self, limit: u64) -> Result<Vec<Patient>, PatientQueryError>;
}
