use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{authorize, Actor, Capability, UserId};
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserUpdate,
};
use crate::modules::audit::application::domain::entities::{AuditAction, NewAuditEntry};
use crate::modules::staff::application::domain::entities::{SelfModification, StaffMember};
use crate::modules::staff::application::ports::incoming::use_cases::{
    UpdateStaffCommand, UpdateStaffError, UpdateStaffUseCase,
};
use crate::shared::validation::{normalize_optional, validate_email};

pub struct UpdateStaffService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    user_query: Q,
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: Arc<dyn PasswordPolicy>,
}

impl<Q, R> UpdateStaffService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        user_query: Q,
        user_repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        password_policy: Arc<dyn PasswordPolicy>,
    ) -> Self {
        Self {
            user_query,
            user_repository,
            password_hasher,
            password_policy,
        }
    }
}

#[async_trait]
impl<Q, R> UpdateStaffUseCase for UpdateStaffService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        id: UserId,
        command: UpdateStaffCommand,
    ) -> Result<StaffMember, UpdateStaffError> {
        authorize(actor, Capability::ManageStaff)?;

        let existing = self
            .user_query
            .find_by_id(id)
            .await?
            .ok_or(UpdateStaffError::NotFound)?;

        if let Some(forbidden) =
            SelfModification::in_edit(actor, id, command.role, command.is_active)
        {
            warn!(user_id = %actor.id, ?forbidden, "Refused self-modification");
            return Err(UpdateStaffError::CannotModifySelf(forbidden));
        }

        let full_name = normalize_optional(command.full_name);
        let email = normalize_optional(command.email);
        if let Some(email) = &email {
            validate_email(email).map_err(UpdateStaffError::Validation)?;
        }

        let password_hash = match command.new_password.filter(|p| !p.is_empty()) {
            Some(password) => {
                self.password_policy.validate(&password)?;
                Some(self.password_hasher.hash_password(&password).await?)
            }
            None => None,
        };

        let details = format!(
            "Edited staff {} (ID {id})",
            full_name.as_deref().unwrap_or(&existing.username)
        );

        let updated = self
            .user_repository
            .update(
                id,
                UserUpdate {
                    full_name,
                    email,
                    role: command.role,
                    is_active: command.is_active,
                    password_hash,
                },
                NewAuditEntry::by(actor, AuditAction::EditStaff, details),
            )
            .await?;

        info!(
            staff_id = %id,
            role = %updated.role,
            is_active = updated.is_active,
            user_id = %actor.id,
            "Staff account updated"
        );
        Ok(updated.into())
    }
}
