mod list_audit_logs_service;

pub use list_audit_logs_service::ListAuditLogsService;
