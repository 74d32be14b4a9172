mod list_audit_logs;

pub use list_audit_logs::{ListAuditLogsError, ListAuditLogsQuery, ListAuditLogsUseCase};
