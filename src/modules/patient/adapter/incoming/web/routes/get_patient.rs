use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::patient::application::domain::entities::{PatientId, PatientView};
use crate::modules::patient::application::ports::incoming::use_cases::GetPatientError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Get a patient
#[utoipa::path(
    get,
    path = "/api/patients/{id}",
    tag = "patients",
    params(("id" = i64, Path, description = "Patient id")),
    responses(
        (status = 200, description = "The patient", body = inline(SuccessResponse<PatientView>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "No such patient", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/patients/{id}")]
pub async fn get_patient_handler(
    user: AuthenticatedUser,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = PatientId::from(path.into_inner());

    match data.patient.get.execute(user.actor(), id).await {
        Ok(view) => ApiResponse::success(view),
        Err(GetPatientError::NotFound) => {
            ApiResponse::not_found("PATIENT_NOT_FOUND", "Patient not found")
        }
        Err(GetPatientError::RepositoryError(ref e)) => {
            error!(patient_id = %id, error = %e, "Failed to load patient");
            ApiResponse::internal_error()
        }
    }
}
