use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::Actor;
use crate::shared::api::ApiResponse;
use actix_web::{get, Responder};

/// Current identity
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "The logged-in user", body = inline(SuccessResponse<Actor>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn current_user_handler(user: AuthenticatedUser) -> impl Responder {
    ApiResponse::success(user.actor().clone())
}
