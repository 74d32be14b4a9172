use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ──────────────────────────────────────────────────────────
// Roles & capabilities
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Dentist,
    Staff,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Dentist => "dentist",
            Role::Staff => "staff",
            Role::Admin => "admin",
        }
    }

    /// The whole permission table of the clinic.
    pub fn can(self, capability: Capability) -> bool {
        use Capability::*;

        match capability {
            AccessMedicalRecords | DeletePatients | ViewPendingDeletions | ViewAllAuditLogs => {
                matches!(self, Role::Manager | Role::Dentist | Role::Admin)
            }
            RequestPatientDeletion => matches!(self, Role::Staff),
            ReviewDeletionRequests | ManageStaff | ManageBackups => {
                matches!(self, Role::Manager | Role::Admin)
            }
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manager" => Ok(Role::Manager),
            "dentist" => Ok(Role::Dentist),
            "staff" => Ok(Role::Staff),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Read and write medical history, allergies, conditions, notes and the
    /// assigned dentist.
    AccessMedicalRecords,
    DeletePatients,
    RequestPatientDeletion,
    ReviewDeletionRequests,
    ViewPendingDeletions,
    ViewAllAuditLogs,
    ManageStaff,
    ManageBackups,
}

impl Capability {
    pub fn requirement(&self) -> &'static str {
        match self {
            Capability::AccessMedicalRecords
            | Capability::DeletePatients
            | Capability::ViewPendingDeletions
            | Capability::ViewAllAuditLogs => "Clinical privileges required",
            Capability::RequestPatientDeletion => "Staff privileges required",
            Capability::ReviewDeletionRequests
            | Capability::ManageStaff
            | Capability::ManageBackups => "Manager privileges required",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Acting identity
// ──────────────────────────────────────────────────────────
//

/// The authenticated user on whose behalf an operation runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Actor {
    pub id: UserId,
    #[schema(example = "nurse01")]
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Role,
}

impl Actor {
    pub fn can(&self, capability: Capability) -> bool {
        self.role.can(capability)
    }

    /// Full name when set, otherwise the username.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}", .0.requirement())]
pub struct AccessDenied(pub Capability);

pub fn authorize(actor: &Actor, capability: Capability) -> Result<(), AccessDenied> {
    if actor.can(capability) {
        Ok(())
    } else {
        tracing::warn!(
            user_id = %actor.id,
            role = %actor.role,
            ?capability,
            "Capability denied"
        );
        Err(AccessDenied(capability))
    }
}

/// A verified, unrevoked session bound to a live account.
#[derive(Debug, Clone)]
pub struct Session {
    pub actor: Actor,
    pub token: String,
    pub csrf_token: String,
    pub expires_at: DateTime<Utc>,
}
