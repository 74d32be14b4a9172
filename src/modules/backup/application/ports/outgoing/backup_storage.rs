use async_trait::async_trait;

use crate::modules::backup::application::domain::entities::{BackupFile, BackupFileName};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackupStorageError {
    #[error("Backup not found")]
    NotFound,

    #[error("Backup already exists")]
    AlreadyExists,

    #[error("Storage error: {0}")]
    Io(String),
}

/// Snapshots of the live database file.
#[async_trait]
pub trait BackupStorage: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<BackupFile>, BackupStorageError>;

    /// Copies the live database to `name`; never overwrites.
    async fn create(&self, name: &BackupFileName) -> Result<BackupFile, BackupStorageError>;

    async fn read(&self, name: &BackupFileName) -> Result<Vec<u8>, BackupStorageError>;

    /// Overwrites the live database file in place with the snapshot.
    async fn restore(&self, name: &BackupFileName) -> Result<(), BackupStorageError>;
}
