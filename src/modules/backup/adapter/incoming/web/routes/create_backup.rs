use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::backup::adapter::incoming::web::backup_error_response;
use crate::modules::backup::application::domain::entities::BackupFile;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};

/// Snapshot the live database
#[utoipa::path(
    post,
    path = "/api/backups",
    tag = "backups",
    params(("X-CSRF-Token" = String, Header, description = "Anti-forgery token from login")),
    responses(
        (status = 201, description = "Backup written", body = inline(SuccessResponse<BackupFile>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Manager privileges required", body = ErrorResponse),
        (status = 409, description = "A backup was already taken this second", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/backups")]
pub async fn create_backup_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.backup.create.execute(user.actor()).await {
        Ok(file) => ApiResponse::created(file),
        Err(ref e) => backup_error_response(e, "create"),
    }
}
