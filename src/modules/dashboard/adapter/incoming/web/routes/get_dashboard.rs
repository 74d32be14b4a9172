use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::dashboard::application::domain::entities::DashboardSummary;
use crate::modules::dashboard::application::ports::incoming::use_cases::DashboardError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Landing page summary
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "Totals and recent activity", body = inline(SuccessResponse<DashboardSummary>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/dashboard")]
pub async fn get_dashboard_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.dashboard.get.execute(user.actor()).await {
        Ok(summary) => ApiResponse::success(summary),
        Err(DashboardError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to build dashboard");
            ApiResponse::internal_error()
        }
    }
}
