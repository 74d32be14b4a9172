use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{Actor, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Login,
    Logout,
    AddPatient,
    EditPatient,
    DeletePatient,
    RequestDelete,
    ApproveDelete,
    DenyDelete,
    AddStaff,
    EditStaff,
    DeleteStaff,
    UpdateProfile,
    Backup,
    Restore,
}

impl AuditAction {
    pub const ALL: [AuditAction; 14] = [
        AuditAction::Login,
        AuditAction::Logout,
        AuditAction::AddPatient,
        AuditAction::EditPatient,
        AuditAction::DeletePatient,
        AuditAction::RequestDelete,
        AuditAction::ApproveDelete,
        AuditAction::DenyDelete,
        AuditAction::AddStaff,
        AuditAction::EditStaff,
        AuditAction::DeleteStaff,
        AuditAction::UpdateProfile,
        AuditAction::Backup,
        AuditAction::Restore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Login => "LOGIN",
            AuditAction::Logout => "LOGOUT",
            AuditAction::AddPatient => "ADD_PATIENT",
            AuditAction::EditPatient => "EDIT_PATIENT",
            AuditAction::DeletePatient => "DELETE_PATIENT",
            AuditAction::RequestDelete => "REQUEST_DELETE",
            AuditAction::ApproveDelete => "APPROVE_DELETE",
            AuditAction::DenyDelete => "DENY_DELETE",
            AuditAction::AddStaff => "ADD_STAFF",
            AuditAction::EditStaff => "EDIT_STAFF",
            AuditAction::DeleteStaff => "DELETE_STAFF",
            AuditAction::UpdateProfile => "UPDATE_PROFILE",
            AuditAction::Backup => "BACKUP",
            AuditAction::Restore => "RESTORE",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown audit action: {0}")]
pub struct UnknownAuditAction(pub String);

impl FromStr for AuditAction {
    type Err = UnknownAuditAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuditAction::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownAuditAction(s.to_string()))
    }
}

/// An entry about to be appended. The timestamp is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuditEntry {
    pub user_id: Option<UserId>,
    pub username: String,
    pub action: AuditAction,
    pub details: String,
}

impl NewAuditEntry {
    pub fn by(actor: &Actor, action: AuditAction, details: impl Into<String>) -> Self {
        Self {
            user_id: Some(actor.id),
            username: actor.username.clone(),
            action,
            details: details.into(),
        }
    }

    /// Entry for work done by the service itself, such as first-run seeding.
    pub fn system(action: AuditAction, details: impl Into<String>) -> Self {
        Self {
            user_id: None,
            username: "system".to_string(),
            action,
            details: details.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuditEntry {
    pub id: i64,
    pub user_id: Option<UserId>,
    pub username: String,
    pub action: AuditAction,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

pub const DEFAULT_AUDIT_LIMIT: u64 = 100;
pub const MAX_AUDIT_LIMIT: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogFilter {
    pub user_id: Option<UserId>,
    pub action: Option<AuditAction>,
    pub limit: u64,
}

impl Default for AuditLogFilter {
    fn default() -> Self {
        Self {
            user_id: None,
            action: None,
            limit: DEFAULT_AUDIT_LIMIT,
        }
    }
}
