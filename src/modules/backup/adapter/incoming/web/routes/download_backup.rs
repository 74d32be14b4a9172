use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::backup::adapter::incoming::web::backup_error_response;
use crate::AppState;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{get, web, HttpResponse, Responder};

/// Download a backup file
#[utoipa::path(
    get,
    path = "/api/backups/{filename}",
    tag = "backups",
    params(("filename" = String, Path, description = "Backup file name, e.g. backup_20251105_143022.db")),
    responses(
        (status = 200, description = "Raw SQLite file", content_type = "application/octet-stream", body = Vec<u8>),
        (status = 400, description = "Malformed file name", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Manager privileges required", body = ErrorResponse),
        (status = 404, description = "No such backup", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/backups/{filename}")]
pub async fn download_backup_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filename = path.into_inner();

    match data.backup.download.execute(user.actor(), &filename).await {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/octet-stream")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(filename)],
            })
            .body(bytes),
        Err(ref e) => backup_error_response(e, "download"),
    }
}
