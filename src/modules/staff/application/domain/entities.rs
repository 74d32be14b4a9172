use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{Actor, Role, UserId};
use crate::auth::application::ports::outgoing::UserQueryResult;

#[allow(clippy::expect_used)]
static USERNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]{3,50}$").expect("static regex should not panic")
});

/// An account as managers see it. The password hash never leaves the
/// repository layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StaffMember {
    pub id: UserId,
    #[schema(example = "nurse01")]
    pub username: String,
    #[schema(example = "Ana Cruz")]
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<UserQueryResult> for StaffMember {
    fn from(user: UserQueryResult) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            email: user.email,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Username must be 3-50 characters of letters, digits, '_', '.' or '-'")]
pub struct InvalidUsername;

pub fn validate_username(username: &str) -> Result<(), InvalidUsername> {
    if USERNAME_PATTERN.is_match(username) {
        Ok(())
    } else {
        Err(InvalidUsername)
    }
}

/// Account changes a manager may not apply to their own account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfModification {
    Delete,
    Deactivate,
    ChangeRole,
}

impl SelfModification {
    pub fn message(&self) -> &'static str {
        match self {
            SelfModification::Delete => "You cannot delete your own account",
            SelfModification::Deactivate => "You cannot deactivate your own account",
            SelfModification::ChangeRole => "You cannot change your own role",
        }
    }

    /// First forbidden change in an edit of `target`, if the actor is
    /// editing their own account.
    pub fn in_edit(
        actor: &Actor,
        target: UserId,
        role: Option<Role>,
        is_active: Option<bool>,
    ) -> Option<SelfModification> {
        if actor.id != target {
            return None;
        }
        if is_active == Some(false) {
            return Some(SelfModification::Deactivate);
        }
        if role.is_some_and(|r| r != actor.role) {
            return Some(SelfModification::ChangeRole);
        }
        None
    }
}
