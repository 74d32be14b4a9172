use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::backup::adapter::incoming::web::backup_error_response;
use crate::modules::backup::application::domain::entities::BackupFile;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};

/// List database backups, newest first
#[utoipa::path(
    get,
    path = "/api/backups",
    tag = "backups",
    responses(
        (status = 200, description = "Available backups", body = inline(SuccessResponse<Vec<BackupFile>>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Manager privileges required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/backups")]
pub async fn list_backups_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.backup.list.execute(user.actor()).await {
        Ok(files) => ApiResponse::success(files),
        Err(ref e) => backup_error_response(e, "list"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::backup::application::ports::outgoing::BackupStorageError;
    use crate::modules::backup::application::services::ListBackupsService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::with_session;
    use crate::tests::support::mocks::MockBackupStorage;
    use actix_web::{test, App};
    use chrono::Utc;

    async fn call(storage: MockBackupStorage, token: &str) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_list_backups(ListBackupsService::new(storage))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(list_backups_handler)).await;

        let req = with_session(test::TestRequest::get().uri("/api/backups"), token).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_list_backups() {
        let mut storage = MockBackupStorage::new();
        storage.expect_list().returning(|| {
            Ok(vec![BackupFile {
                filename: "backup_20251105_143022.db".into(),
                size_bytes: 28672,
                created_at: Utc::now(),
            }])
        });

        let (status, body) = call(storage, "admin").await;

        assert_eq!(status, 200);
        assert_eq!(body["data"][0]["filename"], "backup_20251105_143022.db");
        assert_eq!(body["data"][0]["size_bytes"], 28672);
    }

    #[actix_web::test]
    async fn test_dentist_cannot_list_backups() {
        let (status, body) = call(MockBackupStorage::new(), "dentist").await;

        assert_eq!(status, 403);
        assert_eq!(body["error"]["code"], "INSUFFICIENT_PRIVILEGES");
    }

    #[actix_web::test]
    async fn test_storage_failure_is_internal_error() {
        let mut storage = MockBackupStorage::new();
        storage
            .expect_list()
            .returning(|| Err(BackupStorageError::Io("disk gone".into())));

        let (status, body) = call(storage, "manager").await;

        assert_eq!(status, 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
