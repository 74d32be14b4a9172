use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{authorize, Actor, Capability};
use crate::modules::audit::application::domain::entities::{AuditAction, NewAuditEntry};
use crate::modules::deletion_request::application::domain::entities::DeletionRequest;
use crate::modules::deletion_request::application::ports::incoming::use_cases::{
    RequestDeletionError, RequestDeletionUseCase,
};
use crate::modules::deletion_request::application::ports::outgoing::{
    DeletionRequestQuery, DeletionRequestRepository, NewDeletionRequest,
};
use crate::modules::patient::application::domain::entities::PatientId;
use crate::modules::patient::application::ports::outgoing::PatientQuery;

pub struct RequestDeletionService<P, Q, R>
where
    P: PatientQuery,
    Q: DeletionRequestQuery,
    R: DeletionRequestRepository,
{
    patients: P,
    query: Q,
    repository: R,
}

impl<P, Q, R> RequestDeletionService<P, Q, R>
where
    P: PatientQuery,
    Q: DeletionRequestQuery,
    R: DeletionRequestRepository,
{
    pub fn new(patients: P, query: Q, repository: R) -> Self {
        Self {
            patients,
            query,
            repository,
        }
    }
}

#[async_trait]
impl<P, Q, R> RequestDeletionUseCase for RequestDeletionService<P, Q, R>
where
    P: PatientQuery + Send + Sync,
    Q: DeletionRequestQuery + Send + Sync,
    R: DeletionRequestRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        patient_id: PatientId,
    ) -> Result<DeletionRequest, RequestDeletionError> {
        authorize(actor, Capability::RequestPatientDeletion)?;

        let patient = self
            .patients
            .find_by_id(patient_id)
            .await?
            .ok_or(RequestDeletionError::PatientNotFound)?;

        if self.query.find_pending_for_patient(patient_id).await?.is_some() {
            warn!(patient_id = %patient_id, user_id = %actor.id, "Duplicate deletion request");
            return Err(RequestDeletionError::AlreadyRequested);
        }

        let request = self
            .repository
            .create_pending(
                NewDeletionRequest {
                    patient_id,
                    patient_name: patient.full_name(),
                    requested_by: actor.id,
                    requested_by_name: actor.username.clone(),
                },
                NewAuditEntry::by(
                    actor,
                    AuditAction::RequestDelete,
                    format!("Requested deletion for patient ID {patient_id}"),
                ),
            )
            .await?;

        info!(
            request_id = %request.id,
            patient_id = %patient_id,
            user_id = %actor.id,
            "Deletion requested"
        );
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{AccessDenied, Role};
    use crate::modules::audit::application::domain::entities::AuditAction;
    use crate::modules::deletion_request::application::domain::entities::DeletionStatus;
    use crate::modules::patient::application::domain::entities::MedicalRecord;
    use crate::tests::support::fakes::{actor, FakeDeletionRequestStore, FakePatientStore};

    fn service(
        patients: &FakePatientStore,
        requests: &FakeDeletionRequestStore,
    ) -> RequestDeletionService<FakePatientStore, FakeDeletionRequestStore, FakeDeletionRequestStore>
    {
        RequestDeletionService::new(patients.clone(), requests.clone(), requests.clone())
    }

    #[tokio::test]
    async fn staff_request_creates_one_pending_row() {
        let patients = FakePatientStore::default();
        let id = patients.insert("Maria", "Santos", MedicalRecord::default());
        let requests = FakeDeletionRequestStore::new(patients.clone());

        let request = service(&patients, &requests)
            .execute(&actor(3, "nurse01", Role::Staff), id)
            .await
            .unwrap();

        assert_eq!(request.status, DeletionStatus::Pending);
        assert_eq!(request.patient_name, "Maria Santos");
        assert_eq!(request.requested_by_name, "nurse01");

        let audit = requests.audit_entries();
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].action, AuditAction::RequestDelete);
        assert_eq!(audit[0].details, format!("Requested deletion for patient ID {id}"));
    }

    #[tokio::test]
    async fn second_request_for_same_patient_is_rejected() {
        let patients = FakePatientStore::default();
        let id = patients.insert("Maria", "Santos", MedicalRecord::default());
        let requests = FakeDeletionRequestStore::new(patients.clone());
        let nurse = actor(3, "nurse01", Role::Staff);

        service(&patients, &requests).execute(&nurse, id).await.unwrap();
        let err = service(&patients, &requests)
            .execute(&nurse, id)
            .await
            .unwrap_err();

        assert_eq!(err, RequestDeletionError::AlreadyRequested);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests.audit_entries().len(), 1);
    }

    #[tokio::test]
    async fn clinical_roles_cannot_file_requests() {
        let patients = FakePatientStore::default();
        let id = patients.insert("Maria", "Santos", MedicalRecord::default());
        let requests = FakeDeletionRequestStore::new(patients.clone());

        let err = service(&patients, &requests)
            .execute(&actor(2, "dr_lee", Role::Dentist), id)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RequestDeletionError::Forbidden(AccessDenied(Capability::RequestPatientDeletion))
        );
        assert_eq!(requests.len(), 0);
    }

    #[tokio::test]
    async fn unknown_patient_is_reported() {
        let patients = FakePatientStore::default();
        let requests = FakeDeletionRequestStore::new(patients.clone());

        let err = service(&patients, &requests)
            .execute(&actor(3, "nurse01", Role::Staff), PatientId::from(42))
            .await
            .unwrap_err();

        assert_eq!(err, RequestDeletionError::PatientNotFound);
        assert!(requests.audit_entries().is_empty());
    }
}
