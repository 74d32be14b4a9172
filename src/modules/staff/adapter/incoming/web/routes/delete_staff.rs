use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::staff::application::ports::incoming::use_cases::DeleteStaffError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::error;

/// Delete an account
#[utoipa::path(
    delete,
    path = "/api/staff/{id}",
    tag = "staff",
    params(
        ("id" = i64, Path, description = "User id"),
        ("X-CSRF-Token" = String, Header, description = "Anti-forgery token from login"),
    ),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Manager privileges required", body = ErrorResponse),
        (status = 404, description = "No such account", body = ErrorResponse),
        (status = 409, description = "Cannot delete own account", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/staff/{id}")]
pub async fn delete_staff_handler(
    user: AuthenticatedUser,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = UserId::from(path.into_inner());

    match data.staff.delete.execute(user.actor(), id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteStaffError::Forbidden(ref denied)) => ApiResponse::insufficient_privileges(denied),
        Err(DeleteStaffError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        Err(e @ DeleteStaffError::CannotModifySelf(_)) => {
            ApiResponse::conflict("CANNOT_MODIFY_SELF", &e.to_string())
        }
        Err(DeleteStaffError::RepositoryError(ref e)) => {
            error!(staff_id = %id, error = %e, "Failed to delete staff account");
            ApiResponse::internal_error()
        }
    }
}
