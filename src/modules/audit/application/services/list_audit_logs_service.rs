use async_trait::async_trait;

use crate::auth::application::domain::entities::{Actor, Capability};
use crate::modules::audit::application::domain::entities::{
    AuditEntry, AuditLogFilter, DEFAULT_AUDIT_LIMIT, MAX_AUDIT_LIMIT,
};
use crate::modules::audit::application::ports::incoming::use_cases::{
    ListAuditLogsError, ListAuditLogsQuery, ListAuditLogsUseCase,
};
use crate::modules::audit::application::ports::outgoing::AuditLogRepository;

pub struct ListAuditLogsService<R>
where
    R: AuditLogRepository,
{
    repository: R,
}

impl<R> ListAuditLogsService<R>
where
    R: AuditLogRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListAuditLogsUseCase for ListAuditLogsService<R>
where
    R: AuditLogRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        query: ListAuditLogsQuery,
    ) -> Result<Vec<AuditEntry>, ListAuditLogsError> {
        let user_id = if actor.can(Capability::ViewAllAuditLogs) {
            query.user_id
        } else {
            Some(actor.id)
        };

        let filter = AuditLogFilter {
            user_id,
            action: query.action,
            limit: query
                .limit
                .unwrap_or(DEFAULT_AUDIT_LIMIT)
                .clamp(1, MAX_AUDIT_LIMIT),
        };

        Ok(self.repository.list(&filter).await?)
    }
}
