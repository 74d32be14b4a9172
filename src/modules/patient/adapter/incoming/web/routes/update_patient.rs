use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::patient::adapter::incoming::web::dto::PatientRequest;
use crate::modules::patient::application::domain::entities::{PatientId, PatientView};
use crate::modules::patient::application::ports::incoming::use_cases::UpdatePatientError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use tracing::error;

/// Update a patient
///
/// Medical fields in the body are applied only for roles with access to
/// medical records; for other roles the stored values stay as they are.
#[utoipa::path(
    put,
    path = "/api/patients/{id}",
    tag = "patients",
    request_body = PatientRequest,
    params(
        ("id" = i64, Path, description = "Patient id"),
        ("X-CSRF-Token" = String, Header, description = "Anti-forgery token from login"),
    ),
    responses(
        (status = 200, description = "Patient updated", body = inline(SuccessResponse<PatientView>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "No such patient", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/patients/{id}")]
pub async fn update_patient_handler(
    user: AuthenticatedUser,
    path: web::Path<i64>,
    req: web::Json<PatientRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = PatientId::from(path.into_inner());

    match data
        .patient
        .update
        .execute(user.actor(), id, req.into_inner().into())
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(UpdatePatientError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),
        Err(UpdatePatientError::NotFound) => {
            ApiResponse::not_found("PATIENT_NOT_FOUND", "Patient not found")
        }
        Err(UpdatePatientError::RepositoryError(ref e)) => {
            error!(patient_id = %id, error = %e, "Failed to update patient");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::patient::application::domain::entities::MedicalRecord;
    use crate::modules::patient::application::services::UpdatePatientService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::with_session_and_csrf;
    use crate::tests::support::fakes::FakePatientStore;
    use actix_web::{test, App};

    async fn put(
        store: FakePatientStore,
        uri: &str,
        token: &str,
        body: serde_json::Value,
    ) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_update_patient(UpdatePatientService::new(store))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_patient_handler),
        )
        .await;

        let req = with_session_and_csrf(test::TestRequest::put().uri(uri), token)
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_staff_update_leaves_medical_fields() {
        let store = FakePatientStore::default();
        let id = store.insert(
            "Maria",
            "Santos",
            MedicalRecord {
                allergies: Some("Latex".into()),
                ..MedicalRecord::default()
            },
        );

        let (status, body) = put(
            store.clone(),
            &format!("/api/patients/{id}"),
            "nurse01",
            serde_json::json!({
                "first_name": "Maria",
                "last_name": "Santos",
                "phone": "555-0100",
                "allergies": "None"
            }),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["phone"], "555-0100");
        assert_eq!(store.get(id).unwrap().medical.allergies.as_deref(), Some("Latex"));
    }

    #[actix_web::test]
    async fn test_update_rejects_future_birth_date() {
        let store = FakePatientStore::default();
        let id = store.insert("Maria", "Santos", MedicalRecord::default());

        let (status, body) = put(
            store,
            &format!("/api/patients/{id}"),
            "dentist",
            serde_json::json!({
                "first_name": "Maria",
                "last_name": "Santos",
                "date_of_birth": "2999-01-01"
            }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_update_unknown_patient() {
        let (status, body) = put(
            FakePatientStore::default(),
            "/api/patients/5",
            "dentist",
            serde_json::json!({ "first_name": "A", "last_name": "B" }),
        )
        .await;

        assert_eq!(status, 404);
        assert_eq!(body["error"]["code"], "PATIENT_NOT_FOUND");
    }
}
