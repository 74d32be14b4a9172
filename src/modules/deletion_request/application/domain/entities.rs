use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;
use crate::modules::patient::application::domain::entities::PatientId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct DeletionRequestId(i64);

impl DeletionRequestId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for DeletionRequestId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for DeletionRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ──────────────────────────────────────────────────────────
// State machine
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeletionStatus {
    Pending,
    Approved,
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Deny,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Request has already been {0}")]
pub struct AlreadyDecided(pub DeletionStatus);

impl DeletionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeletionStatus::Pending => "pending",
            DeletionStatus::Approved => "approved",
            DeletionStatus::Denied => "denied",
        }
    }

    /// `pending` moves to `approved` or `denied`; both are terminal.
    pub fn decide(self, decision: Decision) -> Result<DeletionStatus, AlreadyDecided> {
        match (self, decision) {
            (DeletionStatus::Pending, Decision::Approve) => Ok(DeletionStatus::Approved),
            (DeletionStatus::Pending, Decision::Deny) => Ok(DeletionStatus::Denied),
            (decided, _) => Err(AlreadyDecided(decided)),
        }
    }
}

impl fmt::Display for DeletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown deletion status: {0}")]
pub struct UnknownDeletionStatus(pub String);

impl FromStr for DeletionStatus {
    type Err = UnknownDeletionStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(DeletionStatus::Pending),
            "approved" => Ok(DeletionStatus::Approved),
            "denied" => Ok(DeletionStatus::Denied),
            other => Err(UnknownDeletionStatus(other.to_string())),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Request
// ──────────────────────────────────────────────────────────
//

/// A staff member's request to remove a patient, kept after the decision.
///
/// `patient_name` is captured when the request is filed so the row stays
/// readable after the patient is gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DeletionRequest {
    pub id: DeletionRequestId,
    pub patient_id: PatientId,
    #[schema(example = "Maria Santos")]
    pub patient_name: String,
    pub requested_by: Option<UserId>,
    #[schema(example = "nurse01")]
    pub requested_by_name: String,
    pub status: DeletionStatus,
    pub requested_at: DateTime<Utc>,
    /// Reviewer of the decision, for approved and denied requests alike.
    pub approved_by: Option<UserId>,
    pub approved_at: Option<DateTime<Utc>>,
}
