use std::sync::Arc;

use crate::modules::deletion_request::application::ports::incoming::use_cases::{
    ApproveDeletionUseCase, DenyDeletionUseCase, ListPendingDeletionsUseCase,
    RequestDeletionUseCase,
};

#[derive(Clone)]
pub struct DeletionRequestUseCases {
    pub request: Arc<dyn RequestDeletionUseCase + Send + Sync>,
    pub list_pending: Arc<dyn ListPendingDeletionsUseCase + Send + Sync>,
    pub approve: Arc<dyn ApproveDeletionUseCase + Send + Sync>,
    pub deny: Arc<dyn DenyDeletionUseCase + Send + Sync>,
}
