pub mod routes;

use actix_web::HttpResponse;
use tracing::error;

use crate::modules::backup::application::ports::incoming::use_cases::BackupError;
use crate::shared::api::ApiResponse;

pub(crate) fn backup_error_response(err: &BackupError, operation: &str) -> HttpResponse {
    match err {
        BackupError::Forbidden(denied) => ApiResponse::insufficient_privileges(denied),
        BackupError::InvalidFileName => {
            ApiResponse::bad_request("INVALID_FILE_NAME", "Invalid backup file name")
        }
        BackupError::NotFound => ApiResponse::not_found("BACKUP_NOT_FOUND", "Backup not found"),
        BackupError::AlreadyExists => ApiResponse::conflict(
            "BACKUP_ALREADY_EXISTS",
            "A backup with this name already exists, try again in a second",
        ),
        BackupError::StorageError(e) | BackupError::RepositoryError(e) => {
            error!(operation, error = %e, "Backup operation failed");
            ApiResponse::internal_error()
        }
    }
}
