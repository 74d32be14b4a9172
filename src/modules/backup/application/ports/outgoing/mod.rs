pub mod backup_storage;

pub use backup_storage::{BackupStorage, BackupStorageError};
