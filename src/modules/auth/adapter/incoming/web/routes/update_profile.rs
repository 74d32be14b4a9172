use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::Actor;
use crate::auth::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[schema(example = "Nurse One")]
    pub full_name: Option<String>,
    pub email: Option<String>,
    /// Required when `new_password` is given.
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

/// Update own profile
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = "auth",
    request_body = UpdateProfileRequest,
    params(("X-CSRF-Token" = String, Header, description = "Anti-forgery token from login")),
    responses(
        (status = 200, description = "Profile updated", body = inline(SuccessResponse<Actor>)),
        (status = 400, description = "Validation failed or wrong current password", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let command = UpdateProfileCommand {
        full_name: dto.full_name,
        email: dto.email,
        current_password: dto.current_password,
        new_password: dto.new_password,
    };

    match data.auth.update_profile.execute(user.actor(), command).await {
        Ok(actor) => {
            info!(user_id = %actor.id, "Profile updated");
            ApiResponse::success(actor)
        }

        Err(UpdateProfileError::Validation(msg)) => ApiResponse::validation_error(&msg),

        Err(UpdateProfileError::InvalidCurrentPassword) => {
            warn!(user_id = %user.actor().id, "Profile update with wrong current password");
            ApiResponse::bad_request("INVALID_CURRENT_PASSWORD", "Current password is incorrect")
        }

        Err(UpdateProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(UpdateProfileError::HashError(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(UpdateProfileError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to update profile");
            ApiResponse::internal_error()
        }
    }
}
