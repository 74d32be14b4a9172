use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::deletion_request::application::domain::entities::{
    DeletionRequest, DeletionRequestId,
};
use crate::modules::deletion_request::application::ports::incoming::use_cases::ReviewDeletionError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

fn review_response(
    id: DeletionRequestId,
    result: Result<DeletionRequest, ReviewDeletionError>,
) -> HttpResponse {
    match result {
        Ok(request) => ApiResponse::success(request),
        Err(ReviewDeletionError::Forbidden(ref denied)) => {
            ApiResponse::insufficient_privileges(denied)
        }
        Err(ReviewDeletionError::NotFound) => {
            ApiResponse::not_found("REQUEST_NOT_FOUND", "Deletion request not found")
        }
        Err(e @ ReviewDeletionError::AlreadyDecided(_)) => {
            ApiResponse::conflict("REQUEST_ALREADY_DECIDED", &e.to_string())
        }
        Err(ReviewDeletionError::RepositoryError(ref e)) => {
            error!(request_id = %id, error = %e, "Failed to review deletion request");
            ApiResponse::internal_error()
        }
    }
}

/// Approve a deletion request
///
/// Removes the patient and closes the request in one step.
#[utoipa::path(
    post,
    path = "/api/deletion-requests/{id}/approve",
    tag = "deletion-requests",
    params(
        ("id" = i64, Path, description = "Deletion request id"),
        ("X-CSRF-Token" = String, Header, description = "Anti-forgery token from login"),
    ),
    responses(
        (status = 200, description = "Request approved", body = inline(SuccessResponse<DeletionRequest>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Manager privileges required", body = ErrorResponse),
        (status = 404, description = "No such request", body = ErrorResponse),
        (
            status = 409,
            description = "Request was already decided",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "REQUEST_ALREADY_DECIDED",
                    "message": "Request has already been approved"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/deletion-requests/{id}/approve")]
pub async fn approve_deletion_request_handler(
    user: AuthenticatedUser,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = DeletionRequestId::from(path.into_inner());
    review_response(
        id,
        data.deletion_request.approve.execute(user.actor(), id).await,
    )
}

/// Deny a deletion request
///
/// The patient is kept; staff may file a new request later.
#[utoipa::path(
    post,
    path = "/api/deletion-requests/{id}/deny",
    tag = "deletion-requests",
    params(
        ("id" = i64, Path, description = "Deletion request id"),
        ("X-CSRF-Token" = String, Header, description = "Anti-forgery token from login"),
    ),
    responses(
        (status = 200, description = "Request denied", body = inline(SuccessResponse<DeletionRequest>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Manager privileges required", body = ErrorResponse),
        (status = 404, description = "No such request", body = ErrorResponse),
        (status = 409, description = "Request was already decided", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/deletion-requests/{id}/deny")]
pub async fn deny_deletion_request_handler(
    user: AuthenticatedUser,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = DeletionRequestId::from(path.into_inner());
    review_response(id, data.deletion_request.deny.execute(user.actor(), id).await)
}
