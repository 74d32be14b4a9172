//! In-memory stand-ins for the outgoing ports.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::auth::application::domain::entities::{Actor, Role, UserId};
use crate::auth::application::ports::outgoing::{
    HashError, IssuedSession, NewUser, PasswordHasher, SessionClaims, SessionRevocationError,
    SessionRevocationRepository, TokenError, TokenProvider, UserListFilter, UserQuery,
    UserQueryError, UserQueryResult, UserRepository, UserRepositoryError, UserUpdate,
};
use crate::modules::audit::application::domain::entities::{
    AuditEntry, AuditLogFilter, NewAuditEntry,
};
use crate::modules::audit::application::ports::outgoing::{
    AuditLogRepository, AuditLogRepositoryError,
};
use crate::modules::deletion_request::application::domain::entities::{
    Decision, DeletionRequest, DeletionRequestId, DeletionStatus,
};
use crate::modules::deletion_request::application::ports::outgoing::{
    DeletionRequestQuery, DeletionRequestQueryError, DeletionRequestRepository,
    DeletionRequestRepositoryError, NewDeletionRequest,
};
use crate::modules::patient::application::domain::entities::{
    MedicalRecord, Patient, PatientDetails, PatientId,
};
use crate::modules::patient::application::ports::outgoing::{
    NewPatient, PatientChanges, PatientListFilter, PatientQuery, PatientQueryError,
    PatientRepository, PatientRepositoryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

pub fn actor(id: i64, username: &str, role: Role) -> Actor {
    Actor {
        id: UserId::from(id),
        username: username.to_string(),
        full_name: None,
        email: None,
        role,
    }
}

fn to_entry(id: i64, entry: NewAuditEntry) -> AuditEntry {
    AuditEntry {
        id,
        user_id: entry.user_id,
        username: entry.username,
        action: entry.action,
        details: entry.details,
        timestamp: Utc::now(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Users
// ──────────────────────────────────────────────────────────
//

#[derive(Default)]
struct UserState {
    users: Vec<UserQueryResult>,
    audit: Vec<AuditEntry>,
    next_id: i64,
}

#[derive(Clone, Default)]
pub struct FakeUserStore {
    state: Arc<Mutex<UserState>>,
    failure: Option<String>,
}

impl FakeUserStore {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn insert_user(
        &self,
        username: &str,
        password: &str,
        role: Role,
        is_active: bool,
    ) -> UserQueryResult {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let user = UserQueryResult {
            id: UserId::from(state.next_id),
            username: username.to_string(),
            password_hash: FakeHasher::hash_of(password),
            full_name: None,
            email: None,
            role,
            is_active,
            created_at: Utc::now(),
        };
        state.users.push(user.clone());
        user
    }

    pub fn get(&self, id: UserId) -> Option<UserQueryResult> {
        let state = self.state.lock().unwrap();
        state.users.iter().find(|u| u.id == id).cloned()
    }

    pub fn set_role(&self, id: UserId, role: Role) {
        self.modify(id, |u| u.role = role);
    }

    pub fn set_active(&self, id: UserId, is_active: bool) {
        self.modify(id, |u| u.is_active = is_active);
    }

    pub fn audit_entries(&self) -> Vec<AuditEntry> {
        self.state.lock().unwrap().audit.clone()
    }

    fn modify(&self, id: UserId, f: impl FnOnce(&mut UserQueryResult)) {
        let mut state = self.state.lock().unwrap();
        if let Some(user) = state.users.iter_mut().find(|u| u.id == id) {
            f(user);
        }
    }

    fn query_failure(&self) -> Result<(), UserQueryError> {
        match &self.failure {
            Some(msg) => Err(UserQueryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }

    fn repo_failure(&self) -> Result<(), UserRepositoryError> {
        match &self.failure {
            Some(msg) => Err(UserRepositoryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }
}

fn record(state: &mut UserState, entry: NewAuditEntry) {
    let id = state.audit.len() as i64 + 1;
    state.audit.push(to_entry(id, entry));
}

#[async_trait]
impl UserQuery for FakeUserStore {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.query_failure()?;
        Ok(self.get(user_id))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.query_failure()?;
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.username == username).cloned())
    }

    async fn list(&self, filter: &UserListFilter) -> Result<Vec<UserQueryResult>, UserQueryError> {
        self.query_failure()?;
        let state = self.state.lock().unwrap();
        let needle = filter.search.as_deref().map(str::to_lowercase);

        let mut users: Vec<UserQueryResult> = state
            .users
            .iter()
            .filter(|u| filter.role.map_or(true, |r| u.role == r))
            .filter(|u| filter.active.map_or(true, |a| u.is_active == a))
            .filter(|u| match &needle {
                Some(n) => {
                    u.username.to_lowercase().contains(n)
                        || u.full_name
                            .as_deref()
                            .is_some_and(|f| f.to_lowercase().contains(n))
                        || u.id.to_string() == *n
                }
                None => true,
            })
            .cloned()
            .collect();

        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }

    async fn count_by_role(&self, role: Role) -> Result<u64, UserQueryError> {
        self.query_failure()?;
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().filter(|u| u.role == role).count() as u64)
    }
}

#[async_trait]
impl UserRepository for FakeUserStore {
    async fn create(
        &self,
        user: NewUser,
        audit: NewAuditEntry,
    ) -> Result<UserQueryResult, UserRepositoryError> {
        self.repo_failure()?;
        let mut state = self.state.lock().unwrap();
        if state.users.iter().any(|u| u.username == user.username) {
            return Err(UserRepositoryError::UsernameAlreadyExists);
        }

        state.next_id += 1;
        let created = UserQueryResult {
            id: UserId::from(state.next_id),
            username: user.username,
            password_hash: user.password_hash,
            full_name: user.full_name,
            email: user.email,
            role: user.role,
            is_active: user.is_active,
            created_at: Utc::now(),
        };
        state.users.push(created.clone());
        record(&mut state, audit);
        Ok(created)
    }

    async fn update(
        &self,
        user_id: UserId,
        changes: UserUpdate,
        audit: NewAuditEntry,
    ) -> Result<UserQueryResult, UserRepositoryError> {
        self.repo_failure()?;
        let mut state = self.state.lock().unwrap();
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::NotFound)?;

        user.full_name = changes.full_name;
        user.email = changes.email;
        if let Some(role) = changes.role {
            user.role = role;
        }
        if let Some(active) = changes.is_active {
            user.is_active = active;
        }
        if let Some(hash) = changes.password_hash {
            user.password_hash = hash;
        }
        let updated = user.clone();

        record(&mut state, audit);
        Ok(updated)
    }

    async fn delete(&self, user_id: UserId, audit: NewAuditEntry) -> Result<(), UserRepositoryError> {
        self.repo_failure()?;
        let mut state = self.state.lock().unwrap();
        let before = state.users.len();
        state.users.retain(|u| u.id != user_id);
        if state.users.len() == before {
            return Err(UserRepositoryError::NotFound);
        }
        record(&mut state, audit);
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Audit log
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct FakeAuditLog {
    entries: Arc<Mutex<Vec<AuditEntry>>>,
    failure: Option<String>,
}

impl FakeAuditLog {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuditLogRepository for FakeAuditLog {
    async fn append(&self, entry: NewAuditEntry) -> Result<AuditEntry, AuditLogRepositoryError> {
        if let Some(msg) = &self.failure {
            return Err(AuditLogRepositoryError::DatabaseError(msg.clone()));
        }
        let mut entries = self.entries.lock().unwrap();
        let stored = to_entry(entries.len() as i64 + 1, entry);
        entries.push(stored.clone());
        Ok(stored)
    }

    async fn list(
        &self,
        filter: &AuditLogFilter,
    ) -> Result<Vec<AuditEntry>, AuditLogRepositoryError> {
        if let Some(msg) = &self.failure {
            return Err(AuditLogRepositoryError::DatabaseError(msg.clone()));
        }
        Ok(self
            .entries()
            .into_iter()
            .rev()
            .filter(|e| filter.user_id.map_or(true, |id| e.user_id == Some(id)))
            .filter(|e| filter.action.map_or(true, |a| e.action == a))
            .take(filter.limit as usize)
            .collect())
    }
}

//
// ──────────────────────────────────────────────────────────
// Patients
// ──────────────────────────────────────────────────────────
//

#[derive(Default)]
struct PatientState {
    patients: Vec<Patient>,
    audit: Vec<AuditEntry>,
    next_id: i64,
}

#[derive(Clone, Default)]
pub struct FakePatientStore {
    state: Arc<Mutex<PatientState>>,
    failure: Option<String>,
}

impl FakePatientStore {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn insert(&self, first_name: &str, last_name: &str, medical: MedicalRecord) -> PatientId {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = PatientId::from(state.next_id);
        state.patients.push(Patient {
            id,
            details: PatientDetails {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                ..PatientDetails::default()
            },
            medical,
            created_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });
        id
    }

    pub fn get(&self, id: PatientId) -> Option<Patient> {
        let state = self.state.lock().unwrap();
        state.patients.iter().find(|p| p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().patients.len()
    }

    pub fn remove(&self, id: PatientId) -> bool {
        let mut state = self.state.lock().unwrap();
        let before = state.patients.len();
        state.patients.retain(|p| p.id != id);
        state.patients.len() != before
    }

    pub fn audit_entries(&self) -> Vec<AuditEntry> {
        self.state.lock().unwrap().audit.clone()
    }

    fn query_failure(&self) -> Result<(), PatientQueryError> {
        match &self.failure {
            Some(msg) => Err(PatientQueryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }

    fn repo_failure(&self) -> Result<(), PatientRepositoryError> {
        match &self.failure {
            Some(msg) => Err(PatientRepositoryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }
}

fn patient_matches(patient: &Patient, filter: &PatientListFilter) -> bool {
    let search_ok = filter.search.as_deref().map_or(true, |term| {
        let d = &patient.details;
        d.first_name.contains(term)
            || d.last_name.contains(term)
            || d.phone.as_deref().is_some_and(|p| p.contains(term))
            || term.parse::<i64>().is_ok_and(|id| patient.id.value() == id)
    });
    let gender_ok = filter
        .gender
        .as_deref()
        .map_or(true, |g| patient.details.gender.as_deref() == Some(g));
    search_ok && gender_ok
}

#[async_trait]
impl PatientQuery for FakePatientStore {
    async fn find_by_id(&self, id: PatientId) -> Result<Option<Patient>, PatientQueryError> {
        self.query_failure()?;
        Ok(self.get(id))
    }

    async fn list(
        &self,
        filter: &PatientListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Patient>, PatientQueryError> {
        self.query_failure()?;
        let state = self.state.lock().unwrap();
        let matching: Vec<Patient> = state
            .patients
            .iter()
            .rev()
            .filter(|p| patient_matches(p, filter))
            .cloned()
            .collect();

        Ok(PageResult {
            total: matching.len() as u64,
            items: matching
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.per_page as usize)
                .collect(),
            page: page.page,
            per_page: page.per_page,
        })
    }

    async fn count(&self) -> Result<u64, PatientQueryError> {
        self.query_failure()?;
        Ok(self.len() as u64)
    }

    async fn recent(&self, limit: u64) -> Result<Vec<Patient>, PatientQueryError> {
        self.query_failure()?;
        let state = self.state.lock().unwrap();
        Ok(state.patients.iter().rev().take(limit as usize).cloned().collect())
    }
}

#[async_trait]
impl PatientRepository for FakePatientStore {
    async fn create(
        &self,
        patient: NewPatient,
        audit: NewAuditEntry,
    ) -> Result<Patient, PatientRepositoryError> {
        self.repo_failure()?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let now = Utc::now();
        let stored = Patient {
            id: PatientId::from(state.next_id),
            details: patient.details,
            medical: patient.medical,
            created_by: Some(patient.created_by),
            created_at: now,
            updated_at: now,
        };
        state.patients.push(stored.clone());
        let audit_id = state.audit.len() as i64 + 1;
        state.audit.push(to_entry(audit_id, audit));
        Ok(stored)
    }

    async fn update(
        &self,
        id: PatientId,
        changes: PatientChanges,
        audit: NewAuditEntry,
    ) -> Result<Patient, PatientRepositoryError> {
        self.repo_failure()?;
        let mut state = self.state.lock().unwrap();
        let patient = state
            .patients
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PatientRepositoryError::NotFound)?;

        patient.details = changes.details;
        if let Some(medical) = changes.medical {
            patient.medical = medical;
        }
        patient.updated_at = Utc::now();
        let updated = patient.clone();

        let audit_id = state.audit.len() as i64 + 1;
        state.audit.push(to_entry(audit_id, audit));
        Ok(updated)
    }

    async fn delete(
        &self,
        id: PatientId,
        audit: NewAuditEntry,
    ) -> Result<(), PatientRepositoryError> {
        self.repo_failure()?;
        let mut state = self.state.lock().unwrap();
        let before = state.patients.len();
        state.patients.retain(|p| p.id != id);
        if state.patients.len() == before {
            return Err(PatientRepositoryError::NotFound);
        }
        let audit_id = state.audit.len() as i64 + 1;
        state.audit.push(to_entry(audit_id, audit));
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Deletion requests
// ──────────────────────────────────────────────────────────
//

#[derive(Default)]
struct DeletionState {
    requests: Vec<DeletionRequest>,
    audit: Vec<AuditEntry>,
    next_id: i64,
}

/// Approval removes the patient from the linked patient store.
#[derive(Clone, Default)]
pub struct FakeDeletionRequestStore {
    state: Arc<Mutex<DeletionState>>,
    patients: FakePatientStore,
    failure: Option<String>,
}

impl FakeDeletionRequestStore {
    pub fn new(patients: FakePatientStore) -> Self {
        Self {
            patients,
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn insert_pending(&self, patient_id: PatientId, patient_name: &str) -> DeletionRequestId {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = DeletionRequestId::from(state.next_id);
        state.requests.push(DeletionRequest {
            id,
            patient_id,
            patient_name: patient_name.to_string(),
            requested_by: Some(UserId::from(3)),
            requested_by_name: "nurse01".to_string(),
            status: DeletionStatus::Pending,
            requested_at: Utc::now(),
            approved_by: None,
            approved_at: None,
        });
        id
    }

    pub fn get(&self, id: DeletionRequestId) -> Option<DeletionRequest> {
        let state = self.state.lock().unwrap();
        state.requests.iter().find(|r| r.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub fn audit_entries(&self) -> Vec<AuditEntry> {
        self.state.lock().unwrap().audit.clone()
    }

    fn query_failure(&self) -> Result<(), DeletionRequestQueryError> {
        match &self.failure {
            Some(msg) => Err(DeletionRequestQueryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }

    fn repo_failure(&self) -> Result<(), DeletionRequestRepositoryError> {
        match &self.failure {
            Some(msg) => Err(DeletionRequestRepositoryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DeletionRequestQuery for FakeDeletionRequestStore {
    async fn find_by_id(
        &self,
        id: DeletionRequestId,
    ) -> Result<Option<DeletionRequest>, DeletionRequestQueryError> {
        self.query_failure()?;
        Ok(self.get(id))
    }

    async fn find_pending_for_patient(
        &self,
        patient_id: PatientId,
    ) -> Result<Option<DeletionRequest>, DeletionRequestQueryError> {
        self.query_failure()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .requests
            .iter()
            .find(|r| r.patient_id == patient_id && r.status == DeletionStatus::Pending)
            .cloned())
    }

    async fn list_pending(
        &self,
        search: Option<String>,
        limit: Option<u64>,
    ) -> Result<Vec<DeletionRequest>, DeletionRequestQueryError> {
        self.query_failure()?;
        let state = self.state.lock().unwrap();
        let needle = search.map(|s| s.to_lowercase());
        Ok(state
            .requests
            .iter()
            .rev()
            .filter(|r| r.status == DeletionStatus::Pending)
            .filter(|r| match &needle {
                Some(n) => {
                    r.patient_name.to_lowercase().contains(n)
                        || n.parse::<i64>().is_ok_and(|id| {
                            r.id.value() == id || r.patient_id.value() == id
                        })
                }
                None => true,
            })
            .take(limit.map_or(usize::MAX, |l| l as usize))
            .cloned()
            .collect())
    }

    async fn count_pending(&self) -> Result<u64, DeletionRequestQueryError> {
        self.query_failure()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .requests
            .iter()
            .filter(|r| r.status == DeletionStatus::Pending)
            .count() as u64)
    }
}

#[async_trait]
impl DeletionRequestRepository for FakeDeletionRequestStore {
    async fn create_pending(
        &self,
        request: NewDeletionRequest,
        audit: NewAuditEntry,
    ) -> Result<DeletionRequest, DeletionRequestRepositoryError> {
        self.repo_failure()?;
        let mut state = self.state.lock().unwrap();
        if state
            .requests
            .iter()
            .any(|r| r.patient_id == request.patient_id && r.status == DeletionStatus::Pending)
        {
            return Err(DeletionRequestRepositoryError::AlreadyRequested);
        }

        state.next_id += 1;
        let stored = DeletionRequest {
            id: DeletionRequestId::from(state.next_id),
            patient_id: request.patient_id,
            patient_name: request.patient_name,
            requested_by: Some(request.requested_by),
            requested_by_name: request.requested_by_name,
            status: DeletionStatus::Pending,
            requested_at: Utc::now(),
            approved_by: None,
            approved_at: None,
        };
        state.requests.push(stored.clone());
        let audit_id = state.audit.len() as i64 + 1;
        state.audit.push(to_entry(audit_id, audit));
        Ok(stored)
    }

    async fn decide(
        &self,
        id: DeletionRequestId,
        decision: Decision,
        reviewer: UserId,
        audit: NewAuditEntry,
    ) -> Result<DeletionRequest, DeletionRequestRepositoryError> {
        self.repo_failure()?;
        let mut state = self.state.lock().unwrap();
        let request = state
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DeletionRequestRepositoryError::NotFound)?;

        request.status = request
            .status
            .decide(decision)
            .map_err(|e| DeletionRequestRepositoryError::AlreadyDecided(e.0))?;
        request.approved_by = Some(reviewer);
        request.approved_at = Some(Utc::now());
        let decided = request.clone();

        if decision == Decision::Approve {
            self.patients.remove(decided.patient_id);
        }

        let audit_id = state.audit.len() as i64 + 1;
        state.audit.push(to_entry(audit_id, audit));
        Ok(decided)
    }
}

//
// ──────────────────────────────────────────────────────────
// Password hashing & tokens
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Default)]
pub struct FakeHasher;

impl FakeHasher {
    pub fn hash_of(password: &str) -> String {
        format!("hashed:{password}")
    }
}

#[async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(Self::hash_of(password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(Self::hash_of(password) == hash)
    }
}

/// Issues `token-{user}-{n}`; verification only accepts tokens it issued.
#[derive(Default)]
pub struct FakeTokenProvider {
    counter: AtomicU64,
    issued: Mutex<HashMap<String, SessionClaims>>,
}

impl TokenProvider for FakeTokenProvider {
    fn issue_session(&self, user_id: UserId) -> Result<IssuedSession, TokenError> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        let expires_at = now + Duration::hours(8);
        let token = format!("token-{user_id}-{n}");
        let csrf_token = format!("csrf-{user_id}-{n}");

        self.issued.lock().unwrap().insert(
            token.clone(),
            SessionClaims {
                sub: user_id.value(),
                jti: n.to_string(),
                csrf: csrf_token.clone(),
                iss: "test".into(),
                exp: expires_at.timestamp(),
                iat: now.timestamp(),
                nbf: now.timestamp(),
            },
        );

        Ok(IssuedSession {
            token,
            csrf_token,
            expires_at,
        })
    }

    fn verify_session(&self, token: &str) -> Result<SessionClaims, TokenError> {
        self.issued
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(TokenError::MalformedToken)
    }
}

#[derive(Default)]
pub struct FakeRevocations {
    revoked: Mutex<HashSet<String>>,
    failure: Option<String>,
}

impl FakeRevocations {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn mark(&self, token_hash: &str) {
        self.revoked.lock().unwrap().insert(token_hash.to_string());
    }

    pub fn contains(&self, token_hash: &str) -> bool {
        self.revoked.lock().unwrap().contains(token_hash)
    }
}

#[async_trait]
impl SessionRevocationRepository for FakeRevocations {
    async fn revoke(
        &self,
        token_hash: String,
        _user_id: UserId,
        _expires_at: DateTime<Utc>,
    ) -> Result<(), SessionRevocationError> {
        if let Some(msg) = &self.failure {
            return Err(SessionRevocationError::StoreError(msg.clone()));
        }
        self.mark(&token_hash);
        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, SessionRevocationError> {
        if let Some(msg) = &self.failure {
            return Err(SessionRevocationError::StoreError(msg.clone()));
        }
        Ok(self.contains(token_hash))
    }
}
