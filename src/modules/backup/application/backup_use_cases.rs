use std::sync::Arc;

use crate::modules::backup::application::ports::incoming::use_cases::{
    CreateBackupUseCase, DownloadBackupUseCase, ListBackupsUseCase, RestoreBackupUseCase,
};

#[derive(Clone)]
pub struct BackupUseCases {
    pub list: Arc<dyn ListBackupsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateBackupUseCase + Send + Sync>,
    pub download: Arc<dyn DownloadBackupUseCase + Send + Sync>,
    pub restore: Arc<dyn RestoreBackupUseCase + Send + Sync>,
}
