use async_trait::async_trait;

use crate::auth::application::domain::entities::{AccessDenied, Actor, UserId};
use crate::auth::application::ports::outgoing::UserQueryError;
use crate::modules::staff::application::domain::entities::StaffMember;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetStaffError {
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),

    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserQueryError> for GetStaffError {
    fn from(err: UserQueryError) -> Self {
        GetStaffError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait GetStaffUseCase: Send + Sync {
    async fn execute(&self, actor: &Actor, id: UserId) -> Result<StaffMember, GetStaffError>;
}
