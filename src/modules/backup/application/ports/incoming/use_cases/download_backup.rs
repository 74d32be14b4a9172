use async_trait::async_trait;

use super::BackupError;
use crate::auth::application::domain::entities::Actor;

#[async_trait]
pub trait DownloadBackupUseCase: Send + Sync {
    /// Raw bytes of the named snapshot.
    async fn execute(&self, actor: &Actor, filename: &str) -> Result<Vec<u8>, BackupError>;
}
