use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::patient::adapter::incoming::web::dto::PatientListQuery;
use crate::modules::patient::application::domain::entities::PatientView;
use crate::modules::patient::application::ports::incoming::use_cases::ListPatientsError;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageResult;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// List patients
///
/// Newest first. Medical fields appear only for roles with access to them.
#[utoipa::path(
    get,
    path = "/api/patients",
    tag = "patients",
    params(PatientListQuery),
    responses(
        (status = 200, description = "Page of patients", body = inline(SuccessResponse<PageResult<PatientView>>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/patients")]
pub async fn list_patients_handler(
    user: AuthenticatedUser,
    query: web::Query<PatientListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = query.page_params().to_request();

    match data
        .patient
        .list
        .execute(user.actor(), query.filter(), page)
        .await
    {
        Ok(result) => ApiResponse::success(result),
        Err(ListPatientsError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to list patients");
            ApiResponse::internal_error()
        }
    }
}
