use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::fs;

use crate::modules::backup::application::domain::entities::{BackupFile, BackupFileName};
use crate::modules::backup::application::ports::outgoing::{BackupStorage, BackupStorageError};

/// Keeps snapshots as plain copies of the SQLite file in one directory.
#[derive(Debug, Clone)]
pub struct FileBackupStorage {
    database_path: PathBuf,
    backup_dir: PathBuf,
}

impl FileBackupStorage {
    pub fn new(database_path: impl Into<PathBuf>, backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            backup_dir: backup_dir.into(),
        }
    }

    fn path_of(&self, name: &BackupFileName) -> PathBuf {
        self.backup_dir.join(name.as_str())
    }

    async fn describe(path: &Path, name: &str) -> Result<BackupFile, BackupStorageError> {
        let meta = fs::metadata(path).await.map_err(io_error)?;
        let modified = meta.modified().map_err(io_error)?;

        Ok(BackupFile {
            filename: name.to_string(),
            size_bytes: meta.len(),
            created_at: DateTime::<Utc>::from(modified),
        })
    }
}

fn io_error(err: std::io::Error) -> BackupStorageError {
    match err.kind() {
        ErrorKind::NotFound => BackupStorageError::NotFound,
        ErrorKind::AlreadyExists => BackupStorageError::AlreadyExists,
        _ => BackupStorageError::Io(err.to_string()),
    }
}

#[async_trait]
impl BackupStorage for FileBackupStorage {
    async fn list(&self) -> Result<Vec<BackupFile>, BackupStorageError> {
        let mut dir = match fs::read_dir(&self.backup_dir).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(BackupStorageError::Io(e.to_string())),
        };

        let mut files = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| BackupStorageError::Io(e.to_string()))?
        {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            // Anything that could not be downloaded or restored is left out.
            if BackupFileName::parse(name).is_err() {
                continue;
            }
            files.push(Self::describe(&entry.path(), name).await?);
        }

        files.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.filename.cmp(&a.filename))
        });
        Ok(files)
    }

    async fn create(&self, name: &BackupFileName) -> Result<BackupFile, BackupStorageError> {
        fs::create_dir_all(&self.backup_dir)
            .await
            .map_err(|e| BackupStorageError::Io(e.to_string()))?;

        let mut source = fs::File::open(&self.database_path)
            .await
            .map_err(|e| BackupStorageError::Io(e.to_string()))?;

        let target_path = self.path_of(name);
        let mut target = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target_path)
            .await
            .map_err(io_error)?;

        tokio::io::copy(&mut source, &mut target)
            .await
            .map_err(|e| BackupStorageError::Io(e.to_string()))?;
        target
            .sync_all()
            .await
            .map_err(|e| BackupStorageError::Io(e.to_string()))?;

        Self::describe(&target_path, name.as_str()).await
    }

    async fn read(&self, name: &BackupFileName) -> Result<Vec<u8>, BackupStorageError> {
        fs::read(self.path_of(name)).await.map_err(io_error)
    }

    async fn restore(&self, name: &BackupFileName) -> Result<(), BackupStorageError> {
        let source = self.path_of(name);
        if !fs::try_exists(&source).await.map_err(io_error)? {
            return Err(BackupStorageError::NotFound);
        }

        // Copy over the existing file rather than replacing it, so pooled
        // connections keep pointing at the live database.
        fs::copy(&source, &self.database_path)
            .await
            .map_err(|e| BackupStorageError::Io(e.to_string()))?;
        Ok(())
    }
}
