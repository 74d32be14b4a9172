use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::{Actor, Capability, Role};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::audit::application::domain::entities::AuditLogFilter;
use crate::modules::audit::application::ports::outgoing::AuditLogRepository;
use crate::modules::dashboard::application::domain::entities::{
    DashboardSummary, PendingDeletions, LATEST_PENDING, RECENT_ACTIVITY, RECENT_PATIENTS,
};
use crate::modules::dashboard::application::ports::incoming::use_cases::{
    DashboardError, GetDashboardUseCase,
};
use crate::modules::deletion_request::application::ports::outgoing::DeletionRequestQuery;
use crate::modules::patient::application::domain::entities::project;
use crate::modules::patient::application::ports::outgoing::PatientQuery;

pub struct GetDashboardService<P, U, A, D>
where
    P: PatientQuery,
    U: UserQuery,
    A: AuditLogRepository,
    D: DeletionRequestQuery,
{
    patients: P,
    users: U,
    audit_log: A,
    deletion_requests: D,
}

impl<P, U, A, D> GetDashboardService<P, U, A, D>
where
    P: PatientQuery,
    U: UserQuery,
    A: AuditLogRepository,
    D: DeletionRequestQuery,
{
    pub fn new(patients: P, users: U, audit_log: A, deletion_requests: D) -> Self {
        Self {
            patients,
            users,
            audit_log,
            deletion_requests,
        }
    }

    async fn pending_deletions(&self) -> Result<PendingDeletions, DashboardError> {
        let count = self.deletion_requests.count_pending().await?;
        let latest = self
            .deletion_requests
            .list_pending(None, Some(LATEST_PENDING))
            .await?;
        Ok(PendingDeletions { count, latest })
    }
}

#[async_trait]
impl<P, U, A, D> GetDashboardUseCase for GetDashboardService<P, U, A, D>
where
    P: PatientQuery + Send + Sync,
    U: UserQuery + Send + Sync,
    A: AuditLogRepository + Send + Sync,
    D: DeletionRequestQuery + Send + Sync,
{
    async fn execute(&self, actor: &Actor) -> Result<DashboardSummary, DashboardError> {
        let total_patients = self.patients.count().await?;
        let total_staff = self.users.count_by_role(Role::Staff).await?;

        let today = Utc::now().date_naive();
        let recent_patients = self
            .patients
            .recent(RECENT_PATIENTS)
            .await?
            .into_iter()
            .map(|p| project(p, actor.role, today))
            .collect();

        let activity_filter = AuditLogFilter {
            user_id: (!actor.can(Capability::ViewAllAuditLogs)).then_some(actor.id),
            action: None,
            limit: RECENT_ACTIVITY,
        };
        let recent_activity = self.audit_log.list(&activity_filter).await?;

        let pending_deletions = if actor.can(Capability::ViewPendingDeletions) {
            Some(self.pending_deletions().await?)
        } else {
            None
        };

        Ok(DashboardSummary {
            total_patients,
            total_staff,
            recent_patients,
            recent_activity,
            pending_deletions,
        })
    }
}
