use async_trait::async_trait;

use crate::auth::application::domain::entities::{AccessDenied, Actor, Role};
use crate::auth::application::ports::incoming::password_policy::PasswordPolicyError;
use crate::auth::application::ports::outgoing::{HashError, UserRepositoryError};
use crate::modules::staff::application::domain::entities::{InvalidUsername, StaffMember};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateStaffCommand {
    pub username: String,
    pub password: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    /// Defaults to `staff`.
    pub role: Option<Role>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateStaffError {
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),

    #[error("{0}")]
    Validation(String),

    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<InvalidUsername> for CreateStaffError {
    fn from(err: InvalidUsername) -> Self {
        CreateStaffError::Validation(err.to_string())
    }
}

impl From<PasswordPolicyError> for CreateStaffError {
    fn from(err: PasswordPolicyError) -> Self {
        CreateStaffError::Validation(err.to_string())
    }
}

impl From<HashError> for CreateStaffError {
    fn from(err: HashError) -> Self {
        CreateStaffError::HashError(err.to_string())
    }
}

impl From<UserRepositoryError> for CreateStaffError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::UsernameAlreadyExists => CreateStaffError::UsernameAlreadyExists,
            other => CreateStaffError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait CreateStaffUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        command: CreateStaffCommand,
    ) -> Result<StaffMember, CreateStaffError>;
}
