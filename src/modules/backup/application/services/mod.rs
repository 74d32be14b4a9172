mod create_backup_service;
mod download_backup_service;
mod list_backups_service;
mod restore_backup_service;

pub use create_backup_service::CreateBackupService;
pub use download_backup_service::DownloadBackupService;
pub use list_backups_service::ListBackupsService;
pub use restore_backup_service::RestoreBackupService;
