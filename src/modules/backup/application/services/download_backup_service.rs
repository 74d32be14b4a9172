use async_trait::async_trait;

use crate::auth::application::domain::entities::{authorize, Actor, Capability};
use crate::modules::backup::application::domain::entities::BackupFileName;
use crate::modules::backup::application::ports::incoming::use_cases::{
    BackupError, DownloadBackupUseCase,
};
use crate::modules::backup::application::ports::outgoing::BackupStorage;

pub struct DownloadBackupService<S>
where
    S: BackupStorage,
{
    storage: S,
}

impl<S> DownloadBackupService<S>
where
    S: BackupStorage,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S> DownloadBackupUseCase for DownloadBackupService<S>
where
    S: BackupStorage + Send + Sync,
{
    async fn execute(&self, actor: &Actor, filename: &str) -> Result<Vec<u8>, BackupError> {
        authorize(actor, Capability::ManageBackups)?;

        let name = BackupFileName::parse(filename)?;
        Ok(self.storage.read(&name).await?)
    }
}
