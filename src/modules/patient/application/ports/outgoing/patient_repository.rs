use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::audit::application::domain::entities::NewAuditEntry;
use crate::modules::patient::application::domain::entities::{
    MedicalRecord, Patient, PatientDetails, PatientId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub details: PatientDetails,
    pub medical: MedicalRecord,
    pub created_by: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientChanges {
    pub details: PatientDetails,
    /// `None` leaves the stored medical fields as they are.
    pub medical: Option<MedicalRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatientRepositoryError {
    #[error("Patient not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Every write commits together with its audit entry.
#[async_trait]
pub trait PatientRepository: Send + Sync {
    async fn create(
        &self,
        patient: NewPatient,
        audit: NewAuditEntry,
    ) -> Result<Patient, PatientRepositoryError>;

    async fn update(
        &self,
        id: PatientId,
        changes: PatientChanges,
        audit: NewAuditEntry,
    ) -> Result<Patient, PatientRepositoryError>;

    async fn delete(&self, id: PatientId, audit: NewAuditEntry)
        -> Result<(), PatientRepositoryError>;
}
