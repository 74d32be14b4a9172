use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::deletion_request::application::domain::entities::DeletionRequest;
use crate::modules::deletion_request::application::ports::incoming::use_cases::RequestDeletionError;
use crate::modules::patient::application::domain::entities::PatientId;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::error;

/// Ask for a patient to be deleted
///
/// Staff cannot delete patients directly. The request waits in the
/// review queue until a manager or admin approves or denies it.
#[utoipa::path(
    post,
    path = "/api/patients/{id}/deletion-requests",
    tag = "deletion-requests",
    params(
        ("id" = i64, Path, description = "Patient id"),
        ("X-CSRF-Token" = String, Header, description = "Anti-forgery token from login"),
    ),
    responses(
        (status = 201, description = "Request filed", body = inline(SuccessResponse<DeletionRequest>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Only staff file deletion requests", body = ErrorResponse),
        (status = 404, description = "No such patient", body = ErrorResponse),
        (
            status = 409,
            description = "A request is already pending for this patient",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "DELETION_ALREADY_REQUESTED",
                    "message": "A deletion request for this patient already exists"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/patients/{id}/deletion-requests")]
pub async fn request_patient_deletion_handler(
    user: AuthenticatedUser,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patient_id = PatientId::from(path.into_inner());

    match data
        .deletion_request
        .request
        .execute(user.actor(), patient_id)
        .await
    {
        Ok(request) => ApiResponse::created(request),
        Err(RequestDeletionError::Forbidden(ref denied)) => {
            ApiResponse::insufficient_privileges(denied)
        }
        Err(RequestDeletionError::PatientNotFound) => {
            ApiResponse::not_found("PATIENT_NOT_FOUND", "Patient not found")
        }
        Err(e @ RequestDeletionError::AlreadyRequested) => {
            ApiResponse::conflict("DELETION_ALREADY_REQUESTED", &e.to_string())
        }
        Err(RequestDeletionError::RepositoryError(ref e)) => {
            error!(patient_id = %patient_id, error = %e, "Failed to file deletion request");
            ApiResponse::internal_error()
        }
    }
}
