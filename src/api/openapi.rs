use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, UpdateProfileRequest,
};
use crate::auth::application::domain::entities::{Actor, Role, UserId};
use crate::modules::audit::application::domain::entities::{AuditAction, AuditEntry};
use crate::modules::backup::application::domain::entities::BackupFile;
use crate::modules::dashboard::application::domain::entities::{
    DashboardSummary, PendingDeletions,
};
use crate::modules::deletion_request::application::domain::entities::{
    DeletionRequest, DeletionRequestId, DeletionStatus,
};
use crate::modules::patient::adapter::incoming::web::dto::PatientRequest;
use crate::modules::patient::application::domain::entities::{
    MedicalRecord, PatientDetails, PatientId, PatientView,
};
use crate::modules::staff::adapter::incoming::web::dto::{CreateStaffRequest, UpdateStaffRequest};
use crate::modules::staff::application::domain::entities::StaffMember;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dental Clinic Records API",
        version = "1.0.0",
        description = "Patients, staff accounts, deletion approvals, audit trail and backups for a dental clinic"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::current_user_handler,
        crate::auth::adapter::incoming::web::routes::update_profile_handler,

        // Dashboard
        crate::modules::dashboard::adapter::incoming::web::routes::get_dashboard_handler,

        // Patient endpoints
        crate::modules::patient::adapter::incoming::web::routes::list_patients_handler,
        crate::modules::patient::adapter::incoming::web::routes::create_patient_handler,
        crate::modules::patient::adapter::incoming::web::routes::get_patient_handler,
        crate::modules::patient::adapter::incoming::web::routes::update_patient_handler,
        crate::modules::patient::adapter::incoming::web::routes::delete_patient_handler,

        // Deletion approval endpoints
        crate::modules::deletion_request::adapter::incoming::web::routes::request_patient_deletion_handler,
        crate::modules::deletion_request::adapter::incoming::web::routes::list_deletion_requests_handler,
        crate::modules::deletion_request::adapter::incoming::web::routes::approve_deletion_request_handler,
        crate::modules::deletion_request::adapter::incoming::web::routes::deny_deletion_request_handler,

        // Staff endpoints
        crate::modules::staff::adapter::incoming::web::routes::list_staff_handler,
        crate::modules::staff::adapter::incoming::web::routes::create_staff_handler,
        crate::modules::staff::adapter::incoming::web::routes::get_staff_handler,
        crate::modules::staff::adapter::incoming::web::routes::update_staff_handler,
        crate::modules::staff::adapter::incoming::web::routes::delete_staff_handler,

        // Audit
        crate::modules::audit::adapter::incoming::web::routes::list_audit_logs_handler,

        // Backup endpoints
        crate::modules::backup::adapter::incoming::web::routes::list_backups_handler,
        crate::modules::backup::adapter::incoming::web::routes::create_backup_handler,
        crate::modules::backup::adapter::incoming::web::routes::download_backup_handler,
        crate::modules::backup::adapter::incoming::web::routes::restore_backup_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Auth
            LoginRequestDto,
            LoginResponse,
            UpdateProfileRequest,
            Actor,
            Role,
            UserId,

            // Patients
            PatientRequest,
            PatientView,
            PatientDetails,
            MedicalRecord,
            PatientId,

            // Deletion requests
            DeletionRequest,
            DeletionRequestId,
            DeletionStatus,

            // Staff
            CreateStaffRequest,
            UpdateStaffRequest,
            StaffMember,

            // Audit, backups, dashboard
            AuditEntry,
            AuditAction,
            BackupFile,
            DashboardSummary,
            PendingDeletions,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Login, logout and own profile"),
        (name = "dashboard", description = "Landing page summary"),
        (name = "patients", description = "Patient records"),
        (name = "deletion-requests", description = "Staff-filed patient deletion approvals"),
        (name = "staff", description = "Account management"),
        (name = "audit", description = "Append-only activity trail"),
        (name = "backups", description = "Database snapshots"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "SessionCookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "clinic_session",
                    "Session cookie set by POST /api/auth/login",
                ))),
            );
            components.add_security_scheme(
                "CsrfHeader",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "X-CSRF-Token",
                    "Anti-forgery token returned by login; required on every write",
                ))),
            );
        }
    }
}
