use crate::auth::application::domain::entities::AccessDenied;
use crate::modules::audit::application::ports::outgoing::AuditLogRepositoryError;
use crate::modules::backup::application::domain::entities::InvalidFileName;
use crate::modules::backup::application::ports::outgoing::BackupStorageError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackupError {
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),

    #[error("Invalid backup file name")]
    InvalidFileName,

    #[error("Backup not found")]
    NotFound,

    #[error("Backup already exists")]
    AlreadyExists,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<InvalidFileName> for BackupError {
    fn from(_: InvalidFileName) -> Self {
        BackupError::InvalidFileName
    }
}

impl From<BackupStorageError> for BackupError {
    fn from(err: BackupStorageError) -> Self {
        match err {
            BackupStorageError::NotFound => BackupError::NotFound,
            BackupStorageError::AlreadyExists => BackupError::AlreadyExists,
            BackupStorageError::Io(msg) => BackupError::StorageError(msg),
        }
    }
}

impl From<AuditLogRepositoryError> for BackupError {
    fn from(err: AuditLogRepositoryError) -> Self {
        BackupError::RepositoryError(err.to_string())
    }
}
