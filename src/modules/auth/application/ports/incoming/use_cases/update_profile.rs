use async_trait::async_trait;

use crate::auth::application::domain::entities::Actor;
use crate::auth::application::ports::incoming::password_policy::PasswordPolicyError;
use crate::auth::application::ports::outgoing::{HashError, UserRepositoryError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateProfileCommand {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("{0}")]
    Validation(String),

    #[error("Current password is incorrect")]
    InvalidCurrentPassword,

    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    HashError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PasswordPolicyError> for UpdateProfileError {
    fn from(err: PasswordPolicyError) -> Self {
        UpdateProfileError::Validation(err.to_string())
    }
}

impl From<HashError> for UpdateProfileError {
    fn from(err: HashError) -> Self {
        UpdateProfileError::HashError(err.to_string())
    }
}

impl From<UserRepositoryError> for UpdateProfileError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::NotFound => UpdateProfileError::UserNotFound,
            UserRepositoryError::UsernameAlreadyExists => {
                UpdateProfileError::Validation("Username already exists".into())
            }
            UserRepositoryError::DatabaseError(msg) => UpdateProfileError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        command: UpdateProfileCommand,
    ) -> Result<Actor, UpdateProfileError>;
}
