use async_trait::async_trait;

use crate::auth::application::domain::entities::{Role, UserId};
use crate::auth::application::ports::outgoing::user_query::UserQueryResult;
use crate::modules::audit::application::domain::entities::NewAuditEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    pub is_active: bool,
}

/// Full name and email are always written (`None` clears them); the other
/// fields are left untouched when `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Every write commits together with the audit entry that describes it.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(
        &self,
        user: NewUser,
        audit: NewAuditEntry,
    ) -> Result<UserQueryResult, UserRepositoryError>;

    async fn update(
        &self,
        user_id: UserId,
        changes: UserUpdate,
        audit: NewAuditEntry,
    ) -> Result<UserQueryResult, UserRepositoryError>;

    async fn delete(&self, user_id: UserId, audit: NewAuditEntry)
        -> Result<(), UserRepositoryError>;
}
