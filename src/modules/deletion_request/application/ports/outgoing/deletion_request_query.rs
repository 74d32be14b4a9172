use async_trait::async_trait;

use crate::modules::deletion_request::application::domain::entities::{
    DeletionRequest, DeletionRequestId,
};
use crate::modules::patient::application::domain::entities::PatientId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeletionRequestQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DeletionRequestQuery: Send + Sync {
    async fn find_by_id(
        &self,
        id: DeletionRequestId,
    ) -> Result<Option<DeletionRequest>, DeletionRequestQueryError>;

    async fn find_pending_for_patient(
        &self,
        patient_id: PatientId,
    ) -> Result<Option<DeletionRequest>, DeletionRequestQueryError>;

    /// Pending requests, newest first. `search` matches a patient-name
    /// substring, or a request or patient id exactly when numeric.
    async fn list_pending(
        &self,
        search: Option<String>,
        limit: Option<u64>,
    ) -> Result<Vec<DeletionRequest>, DeletionRequestQueryError>;

    async fn count_pending(&self) -> Result<u64, DeletionRequestQueryError>;
}
