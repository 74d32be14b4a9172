use async_trait::async_trait;

use crate::auth::application::domain::entities::{AccessDenied, Actor, UserId};
use crate::auth::application::ports::outgoing::UserRepositoryError;
use crate::modules::staff::application::domain::entities::SelfModification;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteStaffError {
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),

    #[error("User not found")]
    NotFound,

    #[error("{}", .0.message())]
    CannotModifySelf(SelfModification),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for DeleteStaffError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::NotFound => DeleteStaffError::NotFound,
            other => DeleteStaffError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteStaffUseCase: Send + Sync {
    async fn execute(&self, actor: &Actor, id: UserId) -> Result<(), DeleteStaffError>;
}
