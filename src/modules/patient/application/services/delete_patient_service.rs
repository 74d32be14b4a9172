use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::{authorize, Actor, Capability};
use crate::modules::audit::application::domain::entities::{AuditAction, NewAuditEntry};
use crate::modules::patient::application::domain::entities::PatientId;
use crate::modules::patient::application::ports::incoming::use_cases::{
    DeletePatientError, DeletePatientUseCase,
};
use crate::modules::patient::application::ports::outgoing::PatientRepository;

pub struct DeletePatientService<R>
where
    R: PatientRepository,
{
    repository: R,
}

impl<R> DeletePatientService<R>
where
    R: PatientRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeletePatientUseCase for DeletePatientService<R>
where
    R: PatientRepository + Send + Sync,
{
    async fn execute(&self, actor: &Actor, id: PatientId) -> Result<(), DeletePatientError> {
        authorize(actor, Capability::DeletePatients)?;

        self.repository
            .delete(
                id,
                NewAuditEntry::by(actor, AuditAction::DeletePatient, format!("Deleted patient ID {id}")),
            )
            .await?;

        info!(patient_id = %id, user_id = %actor.id, "Patient deleted");
        Ok(())
    }
}
