use std::sync::Arc;

use crate::modules::audit::application::ports::incoming::use_cases::ListAuditLogsUseCase;

#[derive(Clone)]
pub struct AuditUseCases {
    pub list: Arc<dyn ListAuditLogsUseCase + Send + Sync>,
}
