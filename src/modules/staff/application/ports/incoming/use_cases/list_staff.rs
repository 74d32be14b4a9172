use async_trait::async_trait;

use crate::auth::application::domain::entities::{AccessDenied, Actor};
use crate::auth::application::ports::outgoing::{UserListFilter, UserQueryError};
use crate::modules::staff::application::domain::entities::StaffMember;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListStaffError {
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserQueryError> for ListStaffError {
    fn from(err: UserQueryError) -> Self {
        ListStaffError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait ListStaffUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        filter: UserListFilter,
    ) -> Result<Vec<StaffMember>, ListStaffError>;
}
