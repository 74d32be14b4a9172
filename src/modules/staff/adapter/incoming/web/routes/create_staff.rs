use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::staff::adapter::incoming::web::dto::CreateStaffRequest;
use crate::modules::staff::application::domain::entities::StaffMember;
use crate::modules::staff::application::ports::incoming::use_cases::CreateStaffError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::error;

/// Create an account
#[utoipa::path(
    post,
    path = "/api/staff",
    tag = "staff",
    request_body = CreateStaffRequest,
    params(("X-CSRF-Token" = String, Header, description = "Anti-forgery token from login")),
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<StaffMember>)),
        (status = 400, description = "Invalid username, password or email", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Manager privileges required", body = ErrorResponse),
        (
            status = 409,
            description = "Username taken",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "USERNAME_ALREADY_EXISTS",
                    "message": "Username already exists"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/staff")]
pub async fn create_staff_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateStaffRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .staff
        .create
        .execute(user.actor(), req.into_inner().into())
        .await
    {
        Ok(member) => ApiResponse::created(member),
        Err(CreateStaffError::Forbidden(ref denied)) => ApiResponse::insufficient_privileges(denied),
        Err(CreateStaffError::Validation(ref msg)) => ApiResponse::validation_error(msg),
        Err(e @ CreateStaffError::UsernameAlreadyExists) => {
            ApiResponse::conflict("USERNAME_ALREADY_EXISTS", &e.to_string())
        }
        Err(CreateStaffError::HashError(ref e)) | Err(CreateStaffError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to create staff account");
            ApiResponse::internal_error()
        }
    }
}
