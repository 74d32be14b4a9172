use async_trait::async_trait;
use tracing::warn;

use crate::auth::application::domain::entities::{authorize, Actor, Capability};
use crate::modules::audit::application::domain::entities::{AuditAction, NewAuditEntry};
use crate::modules::audit::application::ports::outgoing::AuditLogRepository;
use crate::modules::backup::application::domain::entities::BackupFileName;
use crate::modules::backup::application::ports::incoming::use_cases::{
    BackupError, RestoreBackupUseCase,
};
use crate::modules::backup::application::ports::outgoing::BackupStorage;

/// The audit entry is written after the copy, so it lands in the restored
/// database.
pub struct RestoreBackupService<S, A>
where
    S: BackupStorage,
    A: AuditLogRepository,
{
    storage: S,
    audit_log: A,
}

impl<S, A> RestoreBackupService<S, A>
where
    S: BackupStorage,
    A: AuditLogRepository,
{
    pub fn new(storage: S, audit_log: A) -> Self {
        Self { storage, audit_log }
    }
}

#[async_trait]
impl<S, A> RestoreBackupUseCase for RestoreBackupService<S, A>
where
    S: BackupStorage + Send + Sync,
    A: AuditLogRepository + Send + Sync,
{
    async fn execute(&self, actor: &Actor, filename: &str) -> Result<(), BackupError> {
        authorize(actor, Capability::ManageBackups)?;

        let name = BackupFileName::parse(filename)?;
        self.storage.restore(&name).await?;

        warn!(filename = %name, user_id = %actor.id, "Database restored from backup");

        self.audit_log
            .append(NewAuditEntry::by(
                actor,
                AuditAction::Restore,
                format!("Restored backup {name}"),
            ))
            .await?;

        Ok(())
    }
}
