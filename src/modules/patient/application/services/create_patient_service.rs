use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::auth::application::domain::entities::{Actor, Capability};
use crate::modules::audit::application::domain::entities::{AuditAction, NewAuditEntry};
use crate::modules::patient::application::domain::entities::{
    project, MedicalRecord, PatientInput, PatientView,
};
use crate::modules::patient::application::ports::incoming::use_cases::{
    CreatePatientError, CreatePatientUseCase,
};
use crate::modules::patient::application::ports::outgoing::{NewPatient, PatientRepository};

pub struct CreatePatientService<R>
where
    R: PatientRepository,
{
    repository: R,
}

impl<R> CreatePatientService<R>
where
    R: PatientRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreatePatientUseCase for CreatePatientService<R>
where
    R: PatientRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        input: PatientInput,
    ) -> Result<PatientView, CreatePatientError> {
        let today = Utc::now().date_naive();
        let (details, submitted_medical) = input.validate(today)?;

        // Without clinical rights the submitted medical fields are dropped and
        // the creator is recorded as the assigned dentist.
        let medical = if actor.can(Capability::AccessMedicalRecords) {
            submitted_medical
        } else {
            MedicalRecord {
                assigned_dentist: Some(actor.display_name().to_string()),
                ..MedicalRecord::default()
            }
        };

        let audit = NewAuditEntry::by(
            actor,
            AuditAction::AddPatient,
            format!("Added patient {}", details.full_name()),
        );

        let patient = self
            .repository
            .create(
                NewPatient {
                    details,
                    medical,
                    created_by: actor.id,
                },
                audit,
            )
            .await?;

        info!(patient_id = %patient.id, user_id = %actor.id, "Patient created");
        Ok(project(patient, actor.role, today))
    }
}
