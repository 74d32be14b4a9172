use async_trait::async_trait;

use super::BackupError;
use crate::auth::application::domain::entities::Actor;
use crate::modules::backup::application::domain::entities::BackupFile;

#[async_trait]
pub trait CreateBackupUseCase: Send + Sync {
    async fn execute(&self, actor: &Actor) -> Result<BackupFile, BackupError>;
}
