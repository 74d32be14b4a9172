use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info};

/// Log out
///
/// Revokes the current session and clears the cookie.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    params(("X-CSRF-Token" = String, Header, description = "Anti-forgery token from login")),
    responses(
        (status = 204, description = "Session revoked and cookie cleared"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Missing or invalid anti-forgery token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.logout.execute(user.session()).await {
        Ok(()) => {
            info!(user_id = %user.actor().id, "User logged out");
            HttpResponse::NoContent()
                .cookie(data.session_cookie.removal())
                .finish()
        }

        Err(LogoutError::RevocationFailed(ref e)) => {
            error!(error = %e, "Session revocation failed");
            ApiResponse::internal_error()
        }

        Err(LogoutError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to record logout");
            ApiResponse::internal_error()
        }
    }
}
