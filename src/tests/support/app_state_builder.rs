use actix_web::web;
use std::sync::Arc;

use crate::auth::adapter::incoming::web::SessionCookieConfig;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    LoginUseCase, LogoutUseCase, ResolveSessionUseCase, UpdateProfileUseCase,
};
use crate::modules::audit::application::audit_use_cases::AuditUseCases;
use crate::modules::audit::application::ports::incoming::use_cases::ListAuditLogsUseCase;
use crate::modules::backup::application::backup_use_cases::BackupUseCases;
use crate::modules::backup::application::ports::incoming::use_cases::{
    CreateBackupUseCase, DownloadBackupUseCase, ListBackupsUseCase, RestoreBackupUseCase,
};
use crate::modules::dashboard::application::dashboard_use_cases::DashboardUseCases;
use crate::modules::dashboard::application::ports::incoming::use_cases::GetDashboardUseCase;
use crate::modules::deletion_request::application::deletion_request_use_cases::DeletionRequestUseCases;
use crate::modules::deletion_request::application::ports::incoming::use_cases::{
    ApproveDeletionUseCase, DenyDeletionUseCase, ListPendingDeletionsUseCase,
    RequestDeletionUseCase,
};
use crate::modules::patient::application::patient_use_cases::PatientUseCases;
use crate::modules::patient::application::ports::incoming::use_cases::{
    CreatePatientUseCase, DeletePatientUseCase, GetPatientUseCase, ListPatientsUseCase,
    UpdatePatientUseCase,
};
use crate::modules::staff::application::ports::incoming::use_cases::{
    CreateStaffUseCase, DeleteStaffUseCase, GetStaffUseCase, ListStaffUseCase,
    UpdateStaffUseCase,
};
use crate::modules::staff::application::staff_use_cases::StaffUseCases;
use crate::tests::support::stubs::{StubResolveSession, Unused};
use crate::AppState;

/// Builds an `AppState` for handler tests.
///
/// Sessions resolve through `StubResolveSession`; every other slot is
/// `Unused` until a test swaps in its own use case.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    audit: AuditUseCases,
    patient: PatientUseCases,
    deletion_request: DeletionRequestUseCases,
    staff: StaffUseCases,
    backup: BackupUseCases,
    dashboard: DashboardUseCases,
    session_cookie: SessionCookieConfig,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let unused = Arc::new(Unused);
        Self {
            auth: AuthUseCases {
                login: unused.clone(),
                logout: unused.clone(),
                resolve_session: Arc::new(StubResolveSession),
                update_profile: unused.clone(),
            },
            audit: AuditUseCases {
                list: unused.clone(),
            },
            patient: PatientUseCases {
                create: unused.clone(),
                get: unused.clone(),
                list: unused.clone(),
                update: unused.clone(),
                delete: unused.clone(),
            },
            deletion_request: DeletionRequestUseCases {
                request: unused.clone(),
                list_pending: unused.clone(),
                approve: unused.clone(),
                deny: unused.clone(),
            },
            staff: StaffUseCases {
                create: unused.clone(),
                get: unused.clone(),
                list: unused.clone(),
                update: unused.clone(),
                delete: unused.clone(),
            },
            backup: BackupUseCases {
                list: unused.clone(),
                create: unused.clone(),
                download: unused.clone(),
                restore: unused.clone(),
            },
            dashboard: DashboardUseCases { get: unused },
            session_cookie: SessionCookieConfig::default(),
        }
    }
}

impl TestAppStateBuilder {
    // Auth
    pub fn with_resolve_session(mut self, uc: impl ResolveSessionUseCase + 'static) -> Self {
        self.auth.resolve_session = Arc::new(uc);
        self
    }
    pub fn with_login(mut self, uc: impl LoginUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }
    pub fn with_logout(mut self, uc: impl LogoutUseCase + 'static) -> Self {
        self.auth.logout = Arc::new(uc);
        self
    }
    pub fn with_update_profile(mut self, uc: impl UpdateProfileUseCase + 'static) -> Self {
        self.auth.update_profile = Arc::new(uc);
        self
    }
    pub fn with_session_cookie(mut self, config: SessionCookieConfig) -> Self {
        self.session_cookie = config;
        self
    }

    // Audit
    pub fn with_list_audit(mut self, uc: impl ListAuditLogsUseCase + 'static) -> Self {
        self.audit.list = Arc::new(uc);
        self
    }

    // Patients
    pub fn with_create_patient(mut self, uc: impl CreatePatientUseCase + 'static) -> Self {
        self.patient.create = Arc::new(uc);
        self
    }
    pub fn with_get_patient(mut self, uc: impl GetPatientUseCase + 'static) -> Self {
        self.patient.get = Arc::new(uc);
        self
    }
    pub fn with_list_patients(mut self, uc: impl ListPatientsUseCase + 'static) -> Self {
        self.patient.list = Arc::new(uc);
        self
    }
    pub fn with_update_patient(mut self, uc: impl UpdatePatientUseCase + 'static) -> Self {
        self.patient.update = Arc::new(uc);
        self
    }
    pub fn with_delete_patient(mut self, uc: impl DeletePatientUseCase + 'static) -> Self {
        self.patient.delete = Arc::new(uc);
        self
    }

    // Deletion requests
    pub fn with_request_deletion(mut self, uc: impl RequestDeletionUseCase + 'static) -> Self {
        self.deletion_request.request = Arc::new(uc);
        self
    }
    pub fn with_list_pending_deletions(
        mut self,
        uc: impl ListPendingDeletionsUseCase + 'static,
    ) -> Self {
        self.deletion_request.list_pending = Arc::new(uc);
        self
    }
    pub fn with_approve_deletion(mut self, uc: impl ApproveDeletionUseCase + 'static) -> Self {
        self.deletion_request.approve = Arc::new(uc);
        self
    }
    pub fn with_deny_deletion(mut self, uc: impl DenyDeletionUseCase + 'static) -> Self {
        self.deletion_request.deny = Arc::new(uc);
        self
    }

    // Staff
    pub fn with_create_staff(mut self, uc: impl CreateStaffUseCase + 'static) -> Self {
        self.staff.create = Arc::new(uc);
        self
    }
    pub fn with_get_staff(mut self, uc: impl GetStaffUseCase + 'static) -> Self {
        self.staff.get = Arc::new(uc);
        self
    }
    pub fn with_list_staff(mut self, uc: impl ListStaffUseCase + 'static) -> Self {
        self.staff.list = Arc::new(uc);
        self
    }
    pub fn with_update_staff(mut self, uc: impl UpdateStaffUseCase + 'static) -> Self {
        self.staff.update = Arc::new(uc);
        self
    }
    pub fn with_delete_staff(mut self, uc: impl DeleteStaffUseCase + 'static) -> Self {
        self.staff.delete = Arc::new(uc);
        self
    }

    // Backups
    pub fn with_list_backups(mut self, uc: impl ListBackupsUseCase + 'static) -> Self {
        self.backup.list = Arc::new(uc);
        self
    }
    pub fn with_create_backup(mut self, uc: impl CreateBackupUseCase + 'static) -> Self {
        self.backup.create = Arc::new(uc);
        self
    }
    pub fn with_download_backup(mut self, uc: impl DownloadBackupUseCase + 'static) -> Self {
        self.backup.download = Arc::new(uc);
        self
    }
    pub fn with_restore_backup(mut self, uc: impl RestoreBackupUseCase + 'static) -> Self {
        self.backup.restore = Arc::new(uc);
        self
    }

    // Dashboard
    pub fn with_dashboard(mut self, uc: impl GetDashboardUseCase + 'static) -> Self {
        self.dashboard.get = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            audit: self.audit,
            patient: self.patient,
            deletion_request: self.deletion_request,
            staff: self.staff,
            backup: self.backup,
            dashboard: self.dashboard,
            session_cookie: self.session_cookie,
        })
    }
}
