use async_trait::async_trait;
use mockall::mock;

use crate::modules::backup::application::domain::entities::{BackupFile, BackupFileName};
use crate::modules::backup::application::ports::outgoing::{BackupStorage, BackupStorageError};

mock! {
    pub BackupStorage {}
    #[async_trait]
    impl BackupStorage for BackupStorage {
        async fn list(&self) -> Result<Vec<BackupFile>, BackupStorageError>;
        async fn create(&self, name: &BackupFileName) -> Result<BackupFile, BackupStorageError>;
        async fn read(&self, name: &BackupFileName) -> Result<Vec<u8>, BackupStorageError>;
        async fn restore(&self, name: &BackupFileName) -> Result<(), BackupStorageError>;
    }
}
