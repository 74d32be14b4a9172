use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use tracing::error;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
}

/// LIVENESS CHECK
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS CHECK
/// - Runs `SELECT 1` against the clinic database
#[get("/ready")]
pub async fn readiness(db: web::Data<DatabaseConnection>) -> impl Responder {
    let database = match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => "ok",
        Err(e) => {
            error!(error = %e, "Readiness check failed");
            "unhealthy"
        }
    };

    if database == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            database,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::database::open_in_memory;
    use actix_web::{test, App};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use std::sync::Arc;

    #[actix_web::test]
    async fn liveness_needs_nothing() {
        let app = test::init_service(App::new().service(health)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn ready_when_database_answers() {
        let db = open_in_memory().await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(readiness),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/ready").to_request()).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["database"], "ok");
    }

    #[actix_web::test]
    async fn ready_with_connection_shared_by_adapters() {
        let db = Arc::new(open_in_memory().await.unwrap());
        let data = web::Data::from(Arc::clone(&db));
        let app = test::init_service(App::new().app_data(data).service(readiness)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/ready").to_request()).await;

        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn unavailable_when_database_fails() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_exec_errors([DbErr::Custom("database is locked".into())])
            .into_connection();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(readiness),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/ready").to_request()).await;

        assert_eq!(resp.status(), 503);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["database"], "unhealthy");
    }
}
