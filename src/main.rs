pub mod api;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub mod health;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::incoming::web::SessionCookieConfig;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{
    InMemorySessionRevocationRepository, RedisSessionRevocationRepository, UserQuerySqlite,
    UserRepositorySqlite,
};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, SessionRevocationRepository, TokenProvider,
};
use crate::auth::application::services::bootstrap_manager::{
    ensure_bootstrap_manager, BootstrapManagerConfig, BootstrapOutcome,
};
use crate::auth::application::services::{
    BasicPasswordPolicy, LoginService, LogoutService, ResolveSessionService, UpdateProfileService,
};
use crate::modules::audit::adapter::outgoing::AuditLogRepositorySqlite;
use crate::modules::audit::application::audit_use_cases::AuditUseCases;
use crate::modules::audit::application::services::ListAuditLogsService;
use crate::modules::backup::adapter::outgoing::FileBackupStorage;
use crate::modules::backup::application::backup_use_cases::BackupUseCases;
use crate::modules::backup::application::services::{
    CreateBackupService, DownloadBackupService, ListBackupsService, RestoreBackupService,
};
use crate::modules::dashboard::application::dashboard_use_cases::DashboardUseCases;
use crate::modules::dashboard::application::services::GetDashboardService;
use crate::modules::deletion_request::adapter::outgoing::{
    DeletionRequestQuerySqlite, DeletionRequestRepositorySqlite,
};
use crate::modules::deletion_request::application::deletion_request_use_cases::DeletionRequestUseCases;
use crate::modules::deletion_request::application::services::{
    ApproveDeletionService, DenyDeletionService, ListPendingDeletionsService,
    RequestDeletionService,
};
use crate::modules::patient::adapter::outgoing::{PatientQuerySqlite, PatientRepositorySqlite};
use crate::modules::patient::application::patient_use_cases::PatientUseCases;
use crate::modules::patient::application::services::{
    CreatePatientService, DeletePatientService, GetPatientService, ListPatientsService,
    UpdatePatientService,
};
use crate::modules::staff::application::services::{
    CreateStaffService, DeleteStaffService, GetStaffService, ListStaffService, UpdateStaffService,
};
use crate::modules::staff::application::staff_use_cases::StaffUseCases;
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::shared::database::{self, DatabaseConfig};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};
use std::env;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub audit: AuditUseCases,
    pub patient: PatientUseCases,
    pub deletion_request: DeletionRequestUseCases,
    pub staff: StaffUseCases,
    pub backup: BackupUseCases,
    pub dashboard: DashboardUseCases,
    pub session_cookie: SessionCookieConfig,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    // Environtment variable loading
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", rust_env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(environment = %rust_env, "Starting application...");

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let server_url = format!("{host}:{port}");

    // Database connection
    let db_config = DatabaseConfig::from_env();
    let conn = database::open(&db_config)
        .await
        .with_context(|| format!("opening {}", db_config.path.display()))?;
    info!(path = %db_config.path.display(), "Database ready");

    let db_arc = Arc::new(conn);

    // Session revocations: Redis when configured, otherwise process memory
    let revocations: Arc<dyn SessionRevocationRepository> = match env::var("REDIS_URL") {
        Ok(redis_url) if !redis_url.trim().is_empty() => {
            let redis_pool = Config::from_url(redis_url)
                .create_pool(Some(Runtime::Tokio1))
                .context("creating Redis pool")?;
            info!("Session revocations stored in Redis");
            Arc::new(RedisSessionRevocationRepository::new(Arc::new(redis_pool)))
        }
        _ => {
            warn!("REDIS_URL not set; session revocations are kept in memory");
            Arc::new(InMemorySessionRevocationRepository::new())
        }
    };

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let session_cookie = SessionCookieConfig::from_env(jwt_service.session_expiry());
    let token_provider: Arc<dyn TokenProvider> = Arc::new(jwt_service);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::from_env());
    let password_policy: Arc<dyn PasswordPolicy> = Arc::new(BasicPasswordPolicy);

    let user_query = UserQuerySqlite::new(Arc::clone(&db_arc));
    let user_repo = UserRepositorySqlite::new(Arc::clone(&db_arc));
    let audit_repo = AuditLogRepositorySqlite::new(Arc::clone(&db_arc));
    let patient_query = PatientQuerySqlite::new(Arc::clone(&db_arc));
    let patient_repo = PatientRepositorySqlite::new(Arc::clone(&db_arc));
    let request_query = DeletionRequestQuerySqlite::new(Arc::clone(&db_arc));
    let request_repo = DeletionRequestRepositorySqlite::new(Arc::clone(&db_arc));
    let backup_storage = FileBackupStorage::new(
        db_config.path.clone(),
        env::var("BACKUP_DIR").unwrap_or_else(|_| "backups".to_string()),
    );

    // First-run manager account
    match ensure_bootstrap_manager(
        &BootstrapManagerConfig::from_env(),
        &user_query,
        &user_repo,
        password_hasher.as_ref(),
    )
    .await?
    {
        BootstrapOutcome::Created(id) => info!(user_id = %id, "Bootstrap manager created"),
        BootstrapOutcome::AlreadyPresent => {}
        BootstrapOutcome::Skipped { users_exist: false } => warn!(
            "No accounts exist and BOOTSTRAP_MANAGER_PASSWORD is not set; nobody can log in"
        ),
        BootstrapOutcome::Skipped { users_exist: true } => {}
    }

    let state = AppState {
        auth: AuthUseCases {
            login: Arc::new(LoginService::new(
                user_query.clone(),
                audit_repo.clone(),
                Arc::clone(&password_hasher),
                Arc::clone(&token_provider),
            )),
            logout: Arc::new(LogoutService::new(
                Arc::clone(&revocations),
                audit_repo.clone(),
            )),
            resolve_session: Arc::new(ResolveSessionService::new(
                user_query.clone(),
                Arc::clone(&token_provider),
                Arc::clone(&revocations),
            )),
            update_profile: Arc::new(UpdateProfileService::new(
                user_query.clone(),
                user_repo.clone(),
                Arc::clone(&password_hasher),
                Arc::clone(&password_policy),
            )),
        },
        audit: AuditUseCases {
            list: Arc::new(ListAuditLogsService::new(audit_repo.clone())),
        },
        patient: PatientUseCases {
            create: Arc::new(CreatePatientService::new(patient_repo.clone())),
            get: Arc::new(GetPatientService::new(patient_query.clone())),
            list: Arc::new(ListPatientsService::new(patient_query.clone())),
            update: Arc::new(UpdatePatientService::new(patient_repo.clone())),
            delete: Arc::new(DeletePatientService::new(patient_repo)),
        },
        deletion_request: DeletionRequestUseCases {
            request: Arc::new(RequestDeletionService::new(
                patient_query.clone(),
                request_query.clone(),
                request_repo.clone(),
            )),
            list_pending: Arc::new(ListPendingDeletionsService::new(request_query.clone())),
            approve: Arc::new(ApproveDeletionService::new(
                request_query.clone(),
                request_repo.clone(),
            )),
            deny: Arc::new(DenyDeletionService::new(request_query.clone(), request_repo)),
        },
        staff: StaffUseCases {
            create: Arc::new(CreateStaffService::new(
                user_repo.clone(),
                Arc::clone(&password_hasher),
                Arc::clone(&password_policy),
            )),
            get: Arc::new(GetStaffService::new(user_query.clone())),
            list: Arc::new(ListStaffService::new(user_query.clone())),
            update: Arc::new(UpdateStaffService::new(
                user_query.clone(),
                user_repo.clone(),
                Arc::clone(&password_hasher),
                Arc::clone(&password_policy),
            )),
            delete: Arc::new(DeleteStaffService::new(user_repo)),
        },
        backup: BackupUseCases {
            list: Arc::new(ListBackupsService::new(backup_storage.clone())),
            create: Arc::new(CreateBackupService::new(
                backup_storage.clone(),
                audit_repo.clone(),
            )),
            download: Arc::new(DownloadBackupService::new(backup_storage.clone())),
            restore: Arc::new(RestoreBackupService::new(backup_storage, audit_repo.clone())),
        },
        dashboard: DashboardUseCases {
            get: Arc::new(GetDashboardService::new(
                patient_query,
                user_query,
                audit_repo,
                request_query,
            )),
        },
        session_cookie,
    };

    let openapi = ApiDoc::openapi();

    info!(address = %server_url, "Server listening");

    let db_data = web::Data::from(Arc::clone(&db_arc));

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(db_data.clone())
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("binding {server_url}"))?
    .run()
    .await
    .context("running HTTP server")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::modules::audit::adapter::incoming::web::routes as audit_routes;
    use crate::modules::backup::adapter::incoming::web::routes as backup_routes;
    use crate::modules::dashboard::adapter::incoming::web::routes as dashboard_routes;
    use crate::modules::deletion_request::adapter::incoming::web::routes as deletion_routes;
    use crate::modules::patient::adapter::incoming::web::routes as patient_routes;
    use crate::modules::staff::adapter::incoming::web::routes as staff_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::logout_user_handler);
    cfg.service(auth_routes::current_user_handler);
    cfg.service(auth_routes::update_profile_handler);
    // Dashboard
    cfg.service(dashboard_routes::get_dashboard_handler);
    // Patients
    cfg.service(patient_routes::list_patients_handler);
    cfg.service(patient_routes::create_patient_handler);
    cfg.service(patient_routes::get_patient_handler);
    cfg.service(patient_routes::update_patient_handler);
    cfg.service(patient_routes::delete_patient_handler);
    // Deletion requests
    cfg.service(deletion_routes::request_patient_deletion_handler);
    cfg.service(deletion_routes::list_deletion_requests_handler);
    cfg.service(deletion_routes::approve_deletion_request_handler);
    cfg.service(deletion_routes::deny_deletion_request_handler);
    // Staff
    cfg.service(staff_routes::list_staff_handler);
    cfg.service(staff_routes::create_staff_handler);
    cfg.service(staff_routes::get_staff_handler);
    cfg.service(staff_routes::update_staff_handler);
    cfg.service(staff_routes::delete_staff_handler);
    // Audit
    cfg.service(audit_routes::list_audit_logs_handler);
    // Backups
    cfg.service(backup_routes::list_backups_handler);
    cfg.service(backup_routes::create_backup_handler);
    cfg.service(backup_routes::download_backup_handler);
    cfg.service(backup_routes::restore_backup_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
