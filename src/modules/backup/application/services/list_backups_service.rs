use async_trait::async_trait;

use crate::auth::application::domain::entities::{authorize, Actor, Capability};
use crate::modules::backup::application::domain::entities::BackupFile;
use crate::modules::backup::application::ports::incoming::use_cases::{
    BackupError, ListBackupsUseCase,
};
use crate::modules::backup::application::ports::outgoing::BackupStorage;

pub struct ListBackupsService<S>
where
    S: BackupStorage,
{
    storage: S,
}

impl<S> ListBackupsService<S>
where
    S: BackupStorage,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S> ListBackupsUseCase for ListBackupsService<S>
where
    S: BackupStorage + Send + Sync,
{
    async fn execute(&self, actor: &Actor) -> Result<Vec<BackupFile>, BackupError> {
        authorize(actor, Capability::ManageBackups)?;
        Ok(self.storage.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::modules::backup::application::ports::outgoing::BackupStorageError;
    use crate::tests::support::fakes::actor;
    use crate::tests::support::mocks::MockBackupStorage;
    use chrono::Utc;

    #[tokio::test]
    async fn passes_through_storage_listing() {
        let mut storage = MockBackupStorage::new();
        storage.expect_list().times(1).returning(|| {
            Ok(vec![BackupFile {
                filename: "backup_20251105_143022.db".into(),
                size_bytes: 28672,
                created_at: Utc::now(),
            }])
        });

        let files = ListBackupsService::new(storage)
            .execute(&actor(1, "manager", Role::Manager))
            .await
            .unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].size_bytes, 28672);
    }

    #[tokio::test]
    async fn dentist_never_touches_storage() {
        let mut storage = MockBackupStorage::new();
        storage.expect_list().never();

        let err = ListBackupsService::new(storage)
            .execute(&actor(2, "dr_lee", Role::Dentist))
            .await
            .unwrap_err();

        assert!(matches!(err, BackupError::Forbidden(_)));
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let mut storage = MockBackupStorage::new();
        storage
            .expect_list()
            .returning(|| Err(BackupStorageError::Io("permission denied".into())));

        let err = ListBackupsService::new(storage)
            .execute(&actor(4, "admin", Role::Admin))
            .await
            .unwrap_err();

        assert_eq!(err, BackupError::StorageError("permission denied".into()));
    }
}
