use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::domain::entities::{authorize, Actor, Capability, Role};
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::outgoing::{NewUser, PasswordHasher, UserRepository};
use crate::modules::audit::application::domain::entities::{AuditAction, NewAuditEntry};
use crate::modules::staff::application::domain::entities::{validate_username, StaffMember};
use crate::modules::staff::application::ports::incoming::use_cases::{
    CreateStaffCommand, CreateStaffError, CreateStaffUseCase,
};
use crate::shared::validation::{normalize_optional, validate_email};

pub struct CreateStaffService<R>
where
    R: UserRepository,
{
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: Arc<dyn PasswordPolicy>,
}

impl<R> CreateStaffService<R>
where
    R: UserRepository,
{
    pub fn new(
        user_repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        password_policy: Arc<dyn PasswordPolicy>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            password_policy,
        }
    }
}

#[async_trait]
impl<R> CreateStaffUseCase for CreateStaffService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        command: CreateStaffCommand,
    ) -> Result<StaffMember, CreateStaffError> {
        authorize(actor, Capability::ManageStaff)?;

        let username = command.username.trim().to_string();
        validate_username(&username)?;
        self.password_policy.validate(&command.password)?;

        let full_name = normalize_optional(command.full_name);
        let email = normalize_optional(command.email);
        if let Some(email) = &email {
            validate_email(email).map_err(CreateStaffError::Validation)?;
        }

        let password_hash = self.password_hasher.hash_password(&command.password).await?;
        let details = format!(
            "Added staff {} ({username})",
            full_name.as_deref().unwrap_or(&username)
        );

        let created = self
            .user_repository
            .create(
                NewUser {
                    username,
                    password_hash,
                    full_name,
                    email,
                    role: command.role.unwrap_or(Role::Staff),
                    is_active: true,
                },
                NewAuditEntry::by(actor, AuditAction::AddStaff, details),
            )
            .await?;

        info!(
            staff_id = %created.id,
            role = %created.role,
            user_id = %actor.id,
            "Staff account created"
        );
        Ok(created.into())
    }
}
