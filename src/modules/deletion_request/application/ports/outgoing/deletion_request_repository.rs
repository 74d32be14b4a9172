use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::audit::application::domain::entities::NewAuditEntry;
use crate::modules::deletion_request::application::domain::entities::{
    Decision, DeletionRequest, DeletionRequestId, DeletionStatus,
};
use crate::modules::patient::application::domain::entities::PatientId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDeletionRequest {
    pub patient_id: PatientId,
    pub patient_name: String,
    pub requested_by: UserId,
    pub requested_by_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeletionRequestRepositoryError {
    #[error("Deletion request not found")]
    NotFound,

    #[error("A pending deletion request already exists for this patient")]
    AlreadyRequested,

    #[error("Request has already been {0}")]
    AlreadyDecided(DeletionStatus),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Every write commits together with its audit entry.
#[async_trait]
pub trait DeletionRequestRepository: Send + Sync {
    async fn create_pending(
        &self,
        request: NewDeletionRequest,
        audit: NewAuditEntry,
    ) -> Result<DeletionRequest, DeletionRequestRepositoryError>;

    /// Moves a pending request to its decided state, only if it is still
    /// pending. Approval also removes the patient in the same transaction.
    async fn decide(
        &self,
        id: DeletionRequestId,
        decision: Decision,
        reviewer: UserId,
        audit: NewAuditEntry,
    ) -> Result<DeletionRequest, DeletionRequestRepositoryError>;
}
