use async_trait::async_trait;

use super::BackupError;
use crate::auth::application::domain::entities::Actor;

#[async_trait]
pub trait RestoreBackupUseCase: Send + Sync {
    async fn execute(&self, actor: &Actor, filename: &str) -> Result<(), BackupError>;
}
