use async_trait::async_trait;

use crate::auth::application::domain::entities::Actor;
use crate::auth::application::ports::outgoing::UserQueryError;
use crate::modules::audit::application::ports::outgoing::AuditLogRepositoryError;
use crate::modules::dashboard::application::domain::entities::DashboardSummary;
use crate::modules::deletion_request::application::ports::outgoing::DeletionRequestQueryError;
use crate::modules::patient::application::ports::outgoing::PatientQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PatientQueryError> for DashboardError {
    fn from(err: PatientQueryError) -> Self {
        DashboardError::RepositoryError(err.to_string())
    }
}

impl From<UserQueryError> for DashboardError {
    fn from(err: UserQueryError) -> Self {
        DashboardError::RepositoryError(err.to_string())
    }
}

impl From<AuditLogRepositoryError> for DashboardError {
    fn from(err: AuditLogRepositoryError) -> Self {
        DashboardError::RepositoryError(err.to_string())
    }
}

impl From<DeletionRequestQueryError> for DashboardError {
    fn from(err: DeletionRequestQueryError) -> Self {
        DashboardError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait GetDashboardUseCase: Send + Sync {
    async fn execute(&self, actor: &Actor) -> Result<DashboardSummary, DashboardError>;
}
