use async_trait::async_trait;

use crate::modules::audit::application::domain::entities::{
    AuditEntry, AuditLogFilter, NewAuditEntry,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuditLogRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Append-only access to the audit trail. There is deliberately no way to
/// change or remove an entry once written.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    async fn append(&self, entry: NewAuditEntry) -> Result<AuditEntry, AuditLogRepositoryError>;

    /// Newest first, at most `filter.limit` entries.
    async fn list(&self, filter: &AuditLogFilter)
        -> Result<Vec<AuditEntry>, AuditLogRepositoryError>;
}
