use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::staff::application::domain::entities::StaffMember;
use crate::modules::staff::application::ports::incoming::use_cases::GetStaffError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Fetch one account
#[utoipa::path(
    get,
    path = "/api/staff/{id}",
    tag = "staff",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Account found", body = inline(SuccessResponse<StaffMember>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Manager privileges required", body = ErrorResponse),
        (status = 404, description = "No such account", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/staff/{id}")]
pub async fn get_staff_handler(
    user: AuthenticatedUser,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = UserId::from(path.into_inner());

    match data.staff.get.execute(user.actor(), id).await {
        Ok(member) => ApiResponse::success(member),
        Err(GetStaffError::Forbidden(ref denied)) => ApiResponse::insufficient_privileges(denied),
        Err(GetStaffError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        Err(GetStaffError::RepositoryError(ref e)) => {
            error!(staff_id = %id, error = %e, "Failed to fetch staff account");
            ApiResponse::internal_error()
        }
    }
}
