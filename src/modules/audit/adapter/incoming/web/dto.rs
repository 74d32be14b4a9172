use serde::Deserialize;
use utoipa::IntoParams;

use crate::auth::application::domain::entities::UserId;
use crate::modules::audit::application::domain::entities::AuditAction;
use crate::modules::audit::application::ports::incoming::use_cases::ListAuditLogsQuery;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct AuditLogQuery {
    /// Only honoured for roles that may see every entry.
    pub user_id: Option<i64>,
    #[param(value_type = Option<String>, example = "APPROVE_DELETE")]
    pub action: Option<AuditAction>,
    /// Defaults to 100, capped at 500.
    pub limit: Option<u64>,
}

impl From<AuditLogQuery> for ListAuditLogsQuery {
    fn from(q: AuditLogQuery) -> Self {
        ListAuditLogsQuery {
            user_id: q.user_id.map(UserId::from),
            action: q.action,
            limit: q.limit,
        }
    }
}
