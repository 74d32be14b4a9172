use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::audit::adapter::incoming::web::dto::AuditLogQuery;
use crate::modules::audit::application::domain::entities::AuditEntry;
use crate::modules::audit::application::ports::incoming::use_cases::ListAuditLogsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Read the activity trail
///
/// Newest first. Roles without full audit access only see their own entries.
#[utoipa::path(
    get,
    path = "/api/audit-logs",
    tag = "audit",
    params(AuditLogQuery),
    responses(
        (status = 200, description = "Audit entries", body = inline(SuccessResponse<Vec<AuditEntry>>)),
        (status = 400, description = "Unknown action", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/audit-logs")]
pub async fn list_audit_logs_handler(
    user: AuthenticatedUser,
    query: web::Query<AuditLogQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .audit
        .list
        .execute(user.actor(), query.into_inner().into())
        .await
    {
        Ok(entries) => ApiResponse::success(entries),
        Err(ListAuditLogsError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to list audit entries");
            ApiResponse::internal_error()
        }
    }
}
