use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::{authorize, Actor, Capability};
use crate::modules::audit::application::domain::entities::{AuditAction, NewAuditEntry};
use crate::modules::deletion_request::application::domain::entities::{
    Decision, DeletionRequest, DeletionRequestId,
};
use crate::modules::deletion_request::application::ports::incoming::use_cases::{
    ApproveDeletionUseCase, DenyDeletionUseCase, ReviewDeletionError,
};
use crate::modules::deletion_request::application::ports::outgoing::{
    DeletionRequestQuery, DeletionRequestRepository,
};

/// Shared approve/deny flow. The status check here gives a precise error;
/// the repository's conditional update is what settles concurrent reviews.
pub struct ReviewDeletionService<Q, R>
where
    Q: DeletionRequestQuery,
    R: DeletionRequestRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> ReviewDeletionService<Q, R>
where
    Q: DeletionRequestQuery,
    R: DeletionRequestRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    async fn review(
        &self,
        actor: &Actor,
        id: DeletionRequestId,
        decision: Decision,
    ) -> Result<DeletionRequest, ReviewDeletionError> {
        authorize(actor, Capability::ReviewDeletionRequests)?;

        let request = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ReviewDeletionError::NotFound)?;

        request.status.decide(decision)?;

        let audit = match decision {
            Decision::Approve => NewAuditEntry::by(
                actor,
                AuditAction::ApproveDelete,
                format!("Approved deletion for patient ID {}", request.patient_id),
            ),
            Decision::Deny => NewAuditEntry::by(
                actor,
                AuditAction::DenyDelete,
                format!("Denied deletion request ID {id}"),
            ),
        };

        let decided = self.repository.decide(id, decision, actor.id, audit).await?;

        info!(
            request_id = %id,
            patient_id = %decided.patient_id,
            status = %decided.status,
            user_id = %actor.id,
            "Deletion request reviewed"
        );
        Ok(decided)
    }
}

pub struct ApproveDeletionService<Q, R>(ReviewDeletionService<Q, R>)
where
    Q: DeletionRequestQuery,
    R: DeletionRequestRepository;

impl<Q, R> ApproveDeletionService<Q, R>
where
    Q: DeletionRequestQuery,
    R: DeletionRequestRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self(ReviewDeletionService::new(query, repository))
    }
}

#[async_trait]
impl<Q, R> ApproveDeletionUseCase for ApproveDeletionService<Q, R>
where
    Q: DeletionRequestQuery + Send + Sync,
    R: DeletionRequestRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        id: DeletionRequestId,
    ) -> Result<DeletionRequest, ReviewDeletionError> {
        self.0.review(actor, id, Decision::Approve).await
    }
}

pub struct DenyDeletionService<Q, R>(ReviewDeletionService<Q, R>)
where
    Q: DeletionRequestQuery,
    R: DeletionRequestRepository;

impl<Q, R> DenyDeletionService<Q, R>
where
    Q: DeletionRequestQuery,
    R: DeletionRequestRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self(ReviewDeletionService::new(query, repository))
    }
}

#[async_trait]
impl<Q, R> DenyDeletionUseCase for DenyDeletionService<Q, R>
where
    Q: DeletionRequestQuery + Send + Sync,
    R: DeletionRequestRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        id: DeletionRequestId,
    ) -> Result<DeletionRequest, ReviewDeletionError> {
        self.0.review(actor, id, Decision::Deny).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{AccessDenied, Role};
    use crate::modules::deletion_request::application::domain::entities::DeletionStatus;
    use crate::modules::patient::application::domain::entities::{MedicalRecord, PatientId};
    use crate::tests::support::fakes::{actor, FakeDeletionRequestStore, FakePatientStore};

    fn seeded() -> (FakePatientStore, FakeDeletionRequestStore, PatientId, DeletionRequestId) {
        let patients = FakePatientStore::default();
        let patient_id = patients.insert("Maria", "Santos", MedicalRecord::default());
        let requests = FakeDeletionRequestStore::new(patients.clone());
        let request_id = requests.insert_pending(patient_id, "Maria Santos");
        (patients, requests, patient_id, request_id)
    }

    fn approver(
        requests: &FakeDeletionRequestStore,
    ) -> ApproveDeletionService<FakeDeletionRequestStore, FakeDeletionRequestStore> {
        ApproveDeletionService::new(requests.clone(), requests.clone())
    }

    fn denier(
        requests: &FakeDeletionRequestStore,
    ) -> DenyDeletionService<FakeDeletionRequestStore, FakeDeletionRequestStore> {
        DenyDeletionService::new(requests.clone(), requests.clone())
    }

    #[tokio::test]
    async fn approval_removes_patient_and_audits_once() {
        let (patients, requests, patient_id, request_id) = seeded();
        let manager = actor(1, "manager", Role::Manager);

        let decided = approver(&requests).execute(&manager, request_id).await.unwrap();

        assert_eq!(decided.status, DeletionStatus::Approved);
        assert_eq!(decided.approved_by, Some(manager.id));
        assert!(decided.approved_at.is_some());
        assert!(patients.get(patient_id).is_none());

        let audit = requests.audit_entries();
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].action, AuditAction::ApproveDelete);
        assert_eq!(
            audit[0].details,
            format!("Approved deletion for patient ID {patient_id}")
        );
    }

    #[tokio::test]
    async fn second_decision_is_rejected_without_side_effects() {
        let (patients, requests, patient_id, request_id) = seeded();
        let manager = actor(1, "manager", Role::Manager);

        denier(&requests).execute(&manager, request_id).await.unwrap();

        let err = approver(&requests)
            .execute(&manager, request_id)
            .await
            .unwrap_err();
        assert_eq!(err, ReviewDeletionError::AlreadyDecided(DeletionStatus::Denied));

        let err = denier(&requests)
            .execute(&manager, request_id)
            .await
            .unwrap_err();
        assert_eq!(err, ReviewDeletionError::AlreadyDecided(DeletionStatus::Denied));

        assert!(patients.get(patient_id).is_some());
        let audit = requests.audit_entries();
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].action, AuditAction::DenyDelete);
        assert_eq!(audit[0].details, format!("Denied deletion request ID {request_id}"));
    }

    #[tokio::test]
    async fn approving_when_patient_already_gone_still_succeeds() {
        let (patients, requests, patient_id, request_id) = seeded();
        patients.remove(patient_id);

        let decided = approver(&requests)
            .execute(&actor(4, "admin", Role::Admin), request_id)
            .await
            .unwrap();

        assert_eq!(decided.status, DeletionStatus::Approved);
    }

    #[tokio::test]
    async fn dentist_cannot_review() {
        let (_, requests, _, request_id) = seeded();

        let err = approver(&requests)
            .execute(&actor(2, "dr_lee", Role::Dentist), request_id)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ReviewDeletionError::Forbidden(AccessDenied(Capability::ReviewDeletionRequests))
        );
        assert_eq!(requests.get(request_id).unwrap().status, DeletionStatus::Pending);
    }

    #[tokio::test]
    async fn unknown_request_is_not_found() {
        let (_, requests, _, _) = seeded();

        let err = denier(&requests)
            .execute(&actor(1, "manager", Role::Manager), DeletionRequestId::from(99))
            .await
            .unwrap_err();

        assert_eq!(err, ReviewDeletionError::NotFound);
    }
}
