mod backup_error;
mod create_backup;
mod download_backup;
mod list_backups;
mod restore_backup;

pub use backup_error::BackupError;
pub use create_backup::CreateBackupUseCase;
pub use download_backup::DownloadBackupUseCase;
pub use list_backups::ListBackupsUseCase;
pub use restore_backup::RestoreBackupUseCase;
