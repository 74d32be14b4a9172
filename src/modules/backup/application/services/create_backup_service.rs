use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::auth::application::domain::entities::{authorize, Actor, Capability};
use crate::modules::audit::application::domain::entities::{AuditAction, NewAuditEntry};
use crate::modules::audit::application::ports::outgoing::AuditLogRepository;
use crate::modules::backup::application::domain::entities::{BackupFile, BackupFileName};
use crate::modules::backup::application::ports::incoming::use_cases::{
    BackupError, CreateBackupUseCase,
};
use crate::modules::backup::application::ports::outgoing::BackupStorage;

pub struct CreateBackupService<S, A>
where
    S: BackupStorage,
    A: AuditLogRepository,
{
    storage: S,
    audit_log: A,
}

impl<S, A> CreateBackupService<S, A>
where
    S: BackupStorage,
    A: AuditLogRepository,
{
    pub fn new(storage: S, audit_log: A) -> Self {
        Self { storage, audit_log }
    }
}

#[async_trait]
impl<S, A> CreateBackupUseCase for CreateBackupService<S, A>
where
    S: BackupStorage + Send + Sync,
    A: AuditLogRepository + Send + Sync,
{
    async fn execute(&self, actor: &Actor) -> Result<BackupFile, BackupError> {
        authorize(actor, Capability::ManageBackups)?;

        let name = BackupFileName::for_time(Utc::now());
        let file = self.storage.create(&name).await?;

        self.audit_log
            .append(NewAuditEntry::by(
                actor,
                AuditAction::Backup,
                format!("Created backup {name}"),
            ))
            .await?;

        info!(filename = %name, size_bytes = file.size_bytes, user_id = %actor.id, "Backup created");
        Ok(file)
    }
}
