use anyhow::Context;

use crate::auth::application::domain::entities::{Role, UserId};
use crate::auth::application::ports::outgoing::{
    NewUser, PasswordHasher, UserListFilter, UserQuery, UserRepository,
};
use crate::modules::audit::application::domain::entities::{AuditAction, NewAuditEntry};
use crate::shared::validation::normalize_optional;

/// First-run manager account, configured through the environment.
#[derive(Debug, Clone)]
pub struct BootstrapManagerConfig {
    pub username: String,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
}

impl BootstrapManagerConfig {
    pub fn from_env() -> Self {
        Self {
            username: std::env::var("BOOTSTRAP_MANAGER_USERNAME")
                .unwrap_or_else(|_| "manager".to_string()),
            password: std::env::var("BOOTSTRAP_MANAGER_PASSWORD")
                .ok()
                .filter(|p| !p.is_empty()),
            full_name: normalize_optional(
                std::env::var("BOOTSTRAP_MANAGER_FULL_NAME")
                    .ok()
                    .or_else(|| Some("Clinic Manager".to_string())),
            ),
            email: normalize_optional(std::env::var("BOOTSTRAP_MANAGER_EMAIL").ok()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Created(UserId),
    AlreadyPresent,
    /// No password configured; nothing was written.
    Skipped { users_exist: bool },
}

pub async fn ensure_bootstrap_manager(
    config: &BootstrapManagerConfig,
    user_query: &dyn UserQuery,
    user_repository: &dyn UserRepository,
    password_hasher: &dyn PasswordHasher,
) -> anyhow::Result<BootstrapOutcome> {
    if user_query
        .find_by_username(&config.username)
        .await
        .context("looking up bootstrap manager")?
        .is_some()
    {
        return Ok(BootstrapOutcome::AlreadyPresent);
    }

    let Some(password) = &config.password else {
        let users_exist = !user_query
            .list(&UserListFilter::default())
            .await
            .context("counting users")?
            .is_empty();
        return Ok(BootstrapOutcome::Skipped { users_exist });
    };

    let password_hash = password_hasher
        .hash_password(password)
        .await
        .context("hashing bootstrap manager password")?;

    let created = user_repository
        .create(
            NewUser {
                username: config.username.clone(),
                password_hash,
                full_name: config.full_name.clone(),
                email: config.email.clone(),
                role: Role::Manager,
                is_active: true,
            },
            NewAuditEntry::system(
                AuditAction::AddStaff,
                format!("Created bootstrap manager ({})", config.username),
            ),
        )
        .await
        .context("creating bootstrap manager")?;

    Ok(BootstrapOutcome::Created(created.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fakes::{FakeHasher, FakeUserStore};

    fn config(password: Option<&str>) -> BootstrapManagerConfig {
        BootstrapManagerConfig {
            username: "manager".into(),
            password: password.map(str::to_string),
            full_name: Some("Clinic Manager".into()),
            email: None,
        }
    }

    #[tokio::test]
    async fn creates_manager_once() {
        let store = FakeUserStore::default();

        let first = ensure_bootstrap_manager(&config(Some("first-run-pass")), &store, &store, &FakeHasher)
            .await
            .unwrap();
        let BootstrapOutcome::Created(id) = first else {
            panic!("expected creation, got {first:?}");
        };

        let user = store.get(id).unwrap();
        assert_eq!(user.role, Role::Manager);
        assert!(user.is_active);
        assert_eq!(store.audit_entries()[0].username, "system");

        let second = ensure_bootstrap_manager(&config(Some("first-run-pass")), &store, &store, &FakeHasher)
            .await
            .unwrap();
        assert_eq!(second, BootstrapOutcome::AlreadyPresent);
    }

    #[tokio::test]
    async fn without_password_nothing_is_written() {
        let store = FakeUserStore::default();

        let outcome = ensure_bootstrap_manager(&config(None), &store, &store, &FakeHasher)
            .await
            .unwrap();

        assert_eq!(outcome, BootstrapOutcome::Skipped { users_exist: false });
        assert!(store.audit_entries().is_empty());
    }
}
