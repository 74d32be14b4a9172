use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::auth::application::domain::entities::{Actor, Capability};
use crate::modules::audit::application::domain::entities::{AuditAction, NewAuditEntry};
use crate::modules::patient::application::domain::entities::{
    project, PatientId, PatientInput, PatientView,
};
use crate::modules::patient::application::ports::incoming::use_cases::{
    UpdatePatientError, UpdatePatientUseCase,
};
use crate::modules::patient::application::ports::outgoing::{PatientChanges, PatientRepository};

pub struct UpdatePatientService<R>
where
    R: PatientRepository,
{
    repository: R,
}

impl<R> UpdatePatientService<R>
where
    R: PatientRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdatePatientUseCase for UpdatePatientService<R>
where
    R: PatientRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        id: PatientId,
        input: PatientInput,
    ) -> Result<PatientView, UpdatePatientError> {
        let today = Utc::now().date_naive();
        let (details, medical) = input.validate(today)?;

        let changes = PatientChanges {
            details,
            medical: actor
                .can(Capability::AccessMedicalRecords)
                .then_some(medical),
        };

        let patient = self
            .repository
            .update(
                id,
                changes,
                NewAuditEntry::by(actor, AuditAction::EditPatient, format!("Edited patient ID {id}")),
            )
            .await?;

        info!(patient_id = %id, user_id = %actor.id, "Patient updated");
        Ok(project(patient, actor.role, today))
    }
}
