use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::backup::adapter::incoming::web::backup_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};

/// Replace the live database with a backup
#[utoipa::path(
    post,
    path = "/api/backups/{filename}/restore",
    tag = "backups",
    params(
        ("filename" = String, Path, description = "Backup file name"),
        ("X-CSRF-Token" = String, Header, description = "Anti-forgery token from login"),
    ),
    responses(
        (status = 204, description = "Database restored"),
        (status = 400, description = "Malformed file name", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Manager privileges required", body = ErrorResponse),
        (status = 404, description = "No such backup", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/backups/{filename}/restore")]
pub async fn restore_backup_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.backup.restore.execute(user.actor(), &path).await {
        Ok(()) => ApiResponse::no_content(),
        Err(ref e) => backup_error_response(e, "restore"),
    }
}
