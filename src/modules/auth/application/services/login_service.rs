use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::ports::incoming::use_cases::{
    LoginCommand, LoginError, LoginOutput, LoginUseCase,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};
use crate::modules::audit::application::domain::entities::{AuditAction, NewAuditEntry};
use crate::modules::audit::application::ports::outgoing::AuditLogRepository;

pub struct LoginService<Q, A>
where
    Q: UserQuery,
    A: AuditLogRepository,
{
    user_query: Q,
    audit_log: A,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, A> LoginService<Q, A>
where
    Q: UserQuery,
    A: AuditLogRepository,
{
    pub fn new(
        user_query: Q,
        audit_log: A,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            user_query,
            audit_log,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, A> LoginUseCase for LoginService<Q, A>
where
    Q: UserQuery + Send + Sync,
    A: AuditLogRepository + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<LoginOutput, LoginError> {
        let user = self
            .user_query
            .find_by_username(command.username())
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        let Some(user) = user else {
            warn!(username = %command.username(), "Login failed: unknown username");
            return Err(LoginError::InvalidCredentials);
        };

        let password_ok = self
            .password_hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !password_ok {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        // Checked only after the password so the distinct message never
        // reveals anything to someone who does not know it.
        if !user.is_active {
            warn!(user_id = %user.id, "Login refused: account deactivated");
            return Err(LoginError::AccountInactive);
        }

        let session = self
            .token_provider
            .issue_session(user.id)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        let actor = user.to_actor();

        self.audit_log
            .append(NewAuditEntry::by(&actor, AuditAction::Login, "User logged in"))
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        info!(user_id = %actor.id, role = %actor.role, "User logged in");

        Ok(LoginOutput { actor, session })
    }
}
