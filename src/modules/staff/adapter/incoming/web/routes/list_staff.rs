use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::staff::adapter::incoming::web::dto::StaffListQuery;
use crate::modules::staff::application::domain::entities::StaffMember;
use crate::modules::staff::application::ports::incoming::use_cases::ListStaffError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// List accounts
#[utoipa::path(
    get,
    path = "/api/staff",
    tag = "staff",
    params(StaffListQuery),
    responses(
        (status = 200, description = "Accounts ordered by username", body = inline(SuccessResponse<Vec<StaffMember>>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Manager privileges required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/staff")]
pub async fn list_staff_handler(
    user: AuthenticatedUser,
    query: web::Query<StaffListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .staff
        .list
        .execute(user.actor(), query.into_inner().into_filter())
        .await
    {
        Ok(members) => ApiResponse::success(members),
        Err(ListStaffError::Forbidden(ref denied)) => ApiResponse::insufficient_privileges(denied),
        Err(ListStaffError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to list staff");
            ApiResponse::internal_error()
        }
    }
}
