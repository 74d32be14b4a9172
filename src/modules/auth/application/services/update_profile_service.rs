use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::Actor;
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase,
};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserUpdate,
};
use crate::modules::audit::application::domain::entities::{AuditAction, NewAuditEntry};
use crate::shared::validation::{normalize_optional, validate_email};

pub struct UpdateProfileService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    user_query: Q,
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: Arc<dyn PasswordPolicy>,
}

impl<Q, R> UpdateProfileService<Q, R>
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

    async fn new_password_hash(
        &self,
        actor: &Actor,
        current_password: Option<String>,
        new_password: String,
    ) -> Result<String, UpdateProfileError> {
        let user = self
            .user_query
            .find_by_id(actor.id)
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
            .ok_or(UpdateProfileError::UserNotFound)?;

        let current = current_password.unwrap_or_default();
        let matches = self
            .password_hasher
            .verify_password(&current, &user.password_hash)
            .await?;

        if !matches {
            tracing::warn!(user_id = %actor.id, "Profile update with wrong current password");
            return Err(UpdateProfileError::InvalidCurrentPassword);
        }

        self.password_policy.validate(&new_password)?;

        Ok(self.password_hasher.hash_password(&new_password).await?)
    }
}

#[async_trait]
impl<Q, R> UpdateProfileUseCase for UpdateProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        command: UpdateProfileCommand,
    ) -> Result<Actor, UpdateProfileError> {
        let full_name = normalize_optional(command.full_name);
        let email = normalize_optional(command.email);

        if let Some(email) = &email {
            validate_email(email).map_err(UpdateProfileError::Validation)?;
        }

        let password_hash = match command.new_password.filter(|p| !p.is_empty()) {
            Some(new_password) => Some(
                self.new_password_hash(actor, command.current_password, new_password)
                    .await?,
            ),
            None => None,
        };

        let details = if password_hash.is_some() {
            "Updated profile and password"
        } else {
            "Updated profile"
        };

        let updated = self
            .user_repository
            .update(
                actor.id,
                UserUpdate {
                    full_name,
                    email,
                    password_hash,
                    ..UserUpdate::default()
                },
                NewAuditEntry::by(actor, AuditAction::UpdateProfile, details),
            )
            .await?;

        Ok(updated.to_actor())
    }
}
