use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::deletion_request::adapter::incoming::web::dto::DeletionRequestListQuery;
use crate::modules::deletion_request::application::domain::entities::DeletionRequest;
use crate::modules::deletion_request::application::ports::incoming::use_cases::ListPendingDeletionsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Pending deletion requests
#[utoipa::path(
    get,
    path = "/api/deletion-requests",
    tag = "deletion-requests",
    params(DeletionRequestListQuery),
    responses(
        (status = 200, description = "Pending requests, newest first", body = inline(SuccessResponse<Vec<DeletionRequest>>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Manager privileges required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/deletion-requests")]
pub async fn list_deletion_requests_handler(
    user: AuthenticatedUser,
    query: web::Query<DeletionRequestListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .deletion_request
        .list_pending
        .execute(user.actor(), query.into_inner().search)
        .await
    {
        Ok(requests) => ApiResponse::success(requests),
        Err(ListPendingDeletionsError::Forbidden(ref denied)) => {
            ApiResponse::insufficient_privileges(denied)
        }
        Err(ListPendingDeletionsError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to list deletion requests");
            ApiResponse::internal_error()
        }
    }
}
