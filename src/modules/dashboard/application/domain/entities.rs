use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::audit::application::domain::entities::AuditEntry;
use crate::modules::deletion_request::application::domain::entities::DeletionRequest;
use crate::modules::patient::application::domain::entities::PatientView;

pub const RECENT_PATIENTS: u64 = 5;
pub const RECENT_ACTIVITY: u64 = 5;
pub const LATEST_PENDING: u64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PendingDeletions {
    pub count: u64,
    pub latest: Vec<DeletionRequest>,
}

/// Landing page numbers. Every list is already trimmed to what the actor's
/// role may see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub total_patients: u64,
    /// Accounts with the `staff` role only.
    pub total_staff: u64,
    pub recent_patients: Vec<PatientView>,
    pub recent_activity: Vec<AuditEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_deletions: Option<PendingDeletions>,
}
