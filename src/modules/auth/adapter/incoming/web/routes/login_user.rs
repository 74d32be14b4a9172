use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::Actor;
use crate::auth::application::ports::incoming::use_cases::{LoginCommand, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "nurse01")]
    pub username: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    user: Actor,

    /// Echo this value in the `X-CSRF-Token` header of every write request.
    #[schema(example = "f3KqV0m1s9Qe7cX2dLr8TzYb4WnHj6Ua")]
    csrf_token: String,

    expires_at: DateTime<Utc>,
}

/// Log in
///
/// Verifies the credentials and sets the session cookie.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful; the session cookie is set",
            body = inline(SuccessResponse<LoginResponse>),
        ),
        (
            status = 400,
            description = "Missing username or password",
            body = ErrorResponse,
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid username or password"
                }
            })
        ),
        (
            status = 403,
            description = "Account has been deactivated",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "ACCOUNT_INACTIVE",
                    "message": "Account has been deactivated"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match LoginCommand::new(dto.username, dto.password) {
        Ok(command) => command,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    info!(username = %command.username(), "Login attempt");

    match data.auth.login.execute(command).await {
        Ok(output) => {
            info!(user_id = %output.actor.id, role = %output.actor.role, "User logged in");

            let cookie = data.session_cookie.build(&output.session.token);
            let mut response = ApiResponse::success(LoginResponse {
                user: output.actor,
                csrf_token: output.session.csrf_token,
                expires_at: output.session.expires_at,
            });

            if let Err(e) = response.add_cookie(&cookie) {
                error!(error = %e, "Failed to attach session cookie");
                return ApiResponse::internal_error();
            }
            response
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }

        Err(LoginError::AccountInactive) => {
            warn!("Login failed: account deactivated");
            ApiResponse::forbidden("ACCOUNT_INACTIVE", "Account has been deactivated")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::RepositoryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}
