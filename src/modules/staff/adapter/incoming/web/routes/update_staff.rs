use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::staff::adapter::incoming::web::dto::UpdateStaffRequest;
use crate::modules::staff::application::domain::entities::StaffMember;
use crate::modules::staff::application::ports::incoming::use_cases::UpdateStaffError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use tracing::error;

/// Update an account
///
/// Deactivating an account ends its live sessions on their next request.
#[utoipa::path(
    put,
    path = "/api/staff/{id}",
    tag = "staff",
    request_body = UpdateStaffRequest,
    params(
        ("id" = i64, Path, description = "User id"),
        ("X-CSRF-Token" = String, Header, description = "Anti-forgery token from login"),
    ),
    responses(
        (status = 200, description = "Account updated", body = inline(SuccessResponse<StaffMember>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Manager privileges required", body = ErrorResponse),
        (status = 404, description = "No such account", body = ErrorResponse),
        (
            status = 409,
            description = "Change would lock the caller out",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "CANNOT_MODIFY_SELF",
                    "message": "You cannot deactivate your own account"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/staff/{id}")]
pub async fn update_staff_handler(
    user: AuthenticatedUser,
    path: web::Path<i64>,
    req: web::Json<UpdateStaffRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = UserId::from(path.into_inner());

    match data
        .staff
        .update
        .execute(user.actor(), id, req.into_inner().into())
        .await
    {
        Ok(member) => ApiResponse::success(member),
        Err(UpdateStaffError::Forbidden(ref denied)) => ApiResponse::insufficient_privileges(denied),
        Err(UpdateStaffError::Validation(ref msg)) => ApiResponse::validation_error(msg),
        Err(UpdateStaffError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        Err(e @ UpdateStaffError::CannotModifySelf(_)) => {
            ApiResponse::conflict("CANNOT_MODIFY_SELF", &e.to_string())
        }
        Err(UpdateStaffError::HashError(ref e)) | Err(UpdateStaffError::RepositoryError(ref e)) => {
            error!(staff_id = %id, error = %e, "Failed to update staff account");
            ApiResponse::internal_error()
        }
    }
}
