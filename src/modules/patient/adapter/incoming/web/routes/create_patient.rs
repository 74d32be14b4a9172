use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::patient::adapter::incoming::web::dto::PatientRequest;
use crate::modules::patient::application::domain::entities::PatientView;
use crate::modules::patient::application::ports::incoming::use_cases::CreatePatientError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::error;

/// Register a patient
#[utoipa::path(
    post,
    path = "/api/patients",
    tag = "patients",
    request_body = PatientRequest,
    params(("X-CSRF-Token" = String, Header, description = "Anti-forgery token from login")),
    responses(
        (status = 201, description = "Patient created", body = inline(SuccessResponse<PatientView>)),
        (
            status = 400,
            description = "Validation failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "First name and last name are required"
                }
            })
        ),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/patients")]
pub async fn create_patient_handler(
    user: AuthenticatedUser,
    req: web::Json<PatientRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .patient
        .create
        .execute(user.actor(), req.into_inner().into())
        .await
    {
        Ok(view) => ApiResponse::created(view),
        Err(CreatePatientError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),
        Err(CreatePatientError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to create patient");
            ApiResponse::internal_error()
        }
    }
}
