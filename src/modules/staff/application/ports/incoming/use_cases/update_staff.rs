use async_trait::async_trait;

use crate::auth::application::domain::entities::{AccessDenied, Actor, Role, UserId};
use crate::auth::application::ports::incoming::password_policy::PasswordPolicyError;
use crate::auth::application::ports::outgoing::{HashError, UserQueryError, UserRepositoryError};
use crate::modules::staff::application::domain::entities::{SelfModification, StaffMember};

/// Full name and email replace the stored values; the rest are kept when
/// absent. A blank `new_password` leaves the password unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateStaffCommand {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    pub new_password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateStaffError {
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),

    #[error("{0}")]
    Validation(String),

    #[error("User not found")]
    NotFound,

    #[error("{}", .0.message())]
    CannotModifySelf(SelfModification),

    #[error("Password hashing failed: {0}")]
    HashError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PasswordPolicyError> for UpdateStaffError {
    fn from(err: PasswordPolicyError) -> Self {
        UpdateStaffError::Validation(err.to_string())
    }
}

impl From<HashError> for UpdateStaffError {
    fn from(err: HashError) -> Self {
        UpdateStaffError::HashError(err.to_string())
    }
}

impl From<UserQueryError> for UpdateStaffError {
    fn from(err: UserQueryError) -> Self {
        UpdateStaffError::RepositoryError(err.to_string())
    }
}

impl From<UserRepositoryError> for UpdateStaffError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::NotFound => UpdateStaffError::NotFound,
            other => UpdateStaffError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UpdateStaffUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        id: UserId,
        command: UpdateStaffCommand,
    ) -> Result<StaffMember, UpdateStaffError>;
}
