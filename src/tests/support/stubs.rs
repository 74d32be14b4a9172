//! Use-case stand-ins for handler tests.
//!
//! `StubResolveSession` maps a handful of fixed cookie values to sessions;
//! `Unused` fills every slot a test does not exercise.

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::auth::application::domain::entities::{Actor, Role, Session, UserId};
use crate::auth::application::ports::incoming::use_cases::{
    LoginCommand, LoginError, LoginOutput, LoginUseCase, LogoutError, LogoutUseCase,
    ResolveSessionError, ResolveSessionUseCase, UpdateProfileCommand, UpdateProfileError,
    UpdateProfileUseCase,
};
use crate::auth::application::ports::outgoing::UserListFilter;
use crate::modules::audit::application::domain::entities::AuditEntry;
use crate::modules::audit::application::ports::incoming::use_cases::{
    ListAuditLogsError, ListAuditLogsQuery, ListAuditLogsUseCase,
};
use crate::modules::backup::application::domain::entities::BackupFile;
use crate::modules::backup::application::ports::incoming::use_cases::{
    BackupError, CreateBackupUseCase, DownloadBackupUseCase, ListBackupsUseCase,
    RestoreBackupUseCase,
};
use crate::modules::dashboard::application::domain::entities::DashboardSummary;
use crate::modules::dashboard::application::ports::incoming::use_cases::{
    DashboardError, GetDashboardUseCase,
};
use crate::modules::deletion_request::application::domain::entities::{
    DeletionRequest, DeletionRequestId,
};
use crate::modules::deletion_request::application::ports::incoming::use_cases::{
    ApproveDeletionUseCase, DenyDeletionUseCase, ListPendingDeletionsError,
    ListPendingDeletionsUseCase, RequestDeletionError, RequestDeletionUseCase,
    ReviewDeletionError,
};
use crate::modules::patient::application::domain::entities::{
    PatientId, PatientInput, PatientView,
};
use crate::modules::patient::application::ports::incoming::use_cases::{
    CreatePatientError, CreatePatientUseCase, DeletePatientError, DeletePatientUseCase,
    GetPatientError, GetPatientUseCase, ListPatientsError, ListPatientsUseCase,
    UpdatePatientError, UpdatePatientUseCase,
};
use crate::modules::patient::application::ports::outgoing::PatientListFilter;
use crate::modules::staff::application::domain::entities::StaffMember;
use crate::modules::staff::application::ports::incoming::use_cases::{
    CreateStaffCommand, CreateStaffError, CreateStaffUseCase, DeleteStaffError,
    DeleteStaffUseCase, GetStaffError, GetStaffUseCase, ListStaffError, ListStaffUseCase,
    UpdateStaffCommand, UpdateStaffError, UpdateStaffUseCase,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::tests::support::auth_helper::{TEST_CSRF, TEST_INACTIVE_TOKEN};

//
// ──────────────────────────────────────────────────────────
// Sessions
// ──────────────────────────────────────────────────────────
//

/// Token `manager` is user 1, `dentist` 2, `nurse01` 3 and `admin` 4.
#[derive(Default, Clone)]
pub struct StubResolveSession;

pub fn stub_actor(token: &str) -> Option<Actor> {
    let (id, role) = match token {
        "manager" => (1, Role::Manager),
        "dentist" => (2, Role::Dentist),
        "nurse01" => (3, Role::Staff),
        "admin" => (4, Role::Admin),
        _ => return None,
    };
    Some(Actor {
        id: UserId::from(id),
        username: token.to_string(),
        full_name: None,
        email: None,
        role,
    })
}

#[async_trait]
impl ResolveSessionUseCase for StubResolveSession {
    async fn execute(&self, token: &str) -> Result<Session, ResolveSessionError> {
        if token == TEST_INACTIVE_TOKEN {
            return Err(ResolveSessionError::AccountInactive);
        }
        let actor = stub_actor(token).ok_or(ResolveSessionError::InvalidSession)?;
        Ok(Session {
            actor,
            token: token.to_string(),
            csrf_token: TEST_CSRF.to_string(),
            expires_at: Utc::now() + Duration::hours(8),
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Everything else
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct Unused;

#[async_trait]
impl LoginUseCase for Unused {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginOutput, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl LogoutUseCase for Unused {
    async fn execute(&self, _session: &Session) -> Result<(), LogoutError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateProfileUseCase for Unused {
    async fn execute(
        &self,
        _actor: &Actor,
        _command: UpdateProfileCommand,
    ) -> Result<Actor, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListAuditLogsUseCase for Unused {
    async fn execute(
        &self,
        _actor: &Actor,
        _query: ListAuditLogsQuery,
    ) -> Result<Vec<AuditEntry>, ListAuditLogsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl CreatePatientUseCase for Unused {
    async fn execute(
        &self,
        _actor: &Actor,
        _input: PatientInput,
    ) -> Result<PatientView, CreatePatientError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetPatientUseCase for Unused {
    async fn execute(&self, _actor: &Actor, _id: PatientId) -> Result<PatientView, GetPatientError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListPatientsUseCase for Unused {
    async fn execute(
        &self,
        _actor: &Actor,
        _filter: PatientListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<PatientView>, ListPatientsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdatePatientUseCase for Unused {
    async fn execute(
        &self,
        _actor: &Actor,
        _id: PatientId,
        _input: PatientInput,
    ) -> Result<PatientView, UpdatePatientError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeletePatientUseCase for Unused {
    async fn execute(&self, _actor: &Actor, _id: PatientId) -> Result<(), DeletePatientError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl RequestDeletionUseCase for Unused {
    async fn execute(
        &self,
        _actor: &Actor,
        _patient_id: PatientId,
    ) -> Result<DeletionRequest, RequestDeletionError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListPendingDeletionsUseCase for Unused {
    async fn execute(
        &self,
        _actor: &Actor,
        _search: Option<String>,
    ) -> Result<Vec<DeletionRequest>, ListPendingDeletionsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ApproveDeletionUseCase for Unused {
    async fn execute(
        &self,
        _actor: &Actor,
        _id: DeletionRequestId,
    ) -> Result<DeletionRequest, ReviewDeletionError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DenyDeletionUseCase for Unused {
    async fn execute(
        &self,
        _actor: &Actor,
        _id: DeletionRequestId,
    ) -> Result<DeletionRequest, ReviewDeletionError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl CreateStaffUseCase for Unused {
    async fn execute(
        &self,
        _actor: &Actor,
        _command: CreateStaffCommand,
    ) -> Result<StaffMember, CreateStaffError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetStaffUseCase for Unused {
    async fn execute(&self, _actor: &Actor, _id: UserId) -> Result<StaffMember, GetStaffError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListStaffUseCase for Unused {
    async fn execute(
        &self,
        _actor: &Actor,
        _filter: UserListFilter,
    ) -> Result<Vec<StaffMember>, ListStaffError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateStaffUseCase for Unused {
    async fn execute(
        &self,
        _actor: &Actor,
        _id: UserId,
        _command: UpdateStaffCommand,
    ) -> Result<StaffMember, UpdateStaffError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteStaffUseCase for Unused {
    async fn execute(&self, _actor: &Actor, _id: UserId) -> Result<(), DeleteStaffError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListBackupsUseCase for Unused {
    async fn execute(&self, _actor: &Actor) -> Result<Vec<BackupFile>, BackupError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl CreateBackupUseCase for Unused {
    async fn execute(&self, _actor: &Actor) -> Result<BackupFile, BackupError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DownloadBackupUseCase for Unused {
    async fn execute(&self, _actor: &Actor, _filename: &str) -> Result<Vec<u8>, BackupError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl RestoreBackupUseCase for Unused {
    async fn execute(&self, _actor: &Actor, _filename: &str) -> Result<(), BackupError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetDashboardUseCase for Unused {
    async fn execute(&self, _actor: &Actor) -> Result<DashboardSummary, DashboardError> {
        unimplemented!("Not used in this test")
    }
}
