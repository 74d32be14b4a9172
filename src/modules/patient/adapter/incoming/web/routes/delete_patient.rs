use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::patient::application::domain::entities::PatientId;
use crate::modules::patient::application::ports::incoming::use_cases::DeletePatientError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::error;

/// Delete a patient
///
/// Immediate removal for clinical roles. Staff must file a deletion request.
#[utoipa::path(
    delete,
    path = "/api/patients/{id}",
    tag = "patients",
    params(
        ("id" = i64, Path, description = "Patient id"),
        ("X-CSRF-Token" = String, Header, description = "Anti-forgery token from login"),
    ),
    responses(
        (status = 204, description = "Patient deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (
            status = 403,
            description = "Role may not delete patients directly",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INSUFFICIENT_PRIVILEGES",
                    "message": "Clinical privileges required"
                }
            })
        ),
        (status = 404, description = "No such patient", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/patients/{id}")]
pub async fn delete_patient_handler(
    user: AuthenticatedUser,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = PatientId::from(path.into_inner());

    match data.patient.delete.execute(user.actor(), id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeletePatientError::Forbidden(ref denied)) => {
            ApiResponse::insufficient_privileges(denied)
        }
        Err(DeletePatientError::NotFound) => {
            ApiResponse::not_found("PATIENT_NOT_FOUND", "Patient not found")
        }
        Err(DeletePatientError::RepositoryError(ref e)) => {
            error!(patient_id = %id, error = %e, "Failed to delete patient");
            ApiResponse::internal_error()
        }
    }
}
