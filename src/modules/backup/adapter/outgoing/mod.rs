pub mod file_backup_storage;

pub use file_backup_storage::FileBackupStorage;
