use async_trait::async_trait;

use crate::auth::application::domain::entities::Actor;
use crate::auth::application::ports::outgoing::IssuedSession;

#[derive(Debug, Clone)]
pub struct LoginCommand {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginCommandError {
    #[error("Username is required")]
    MissingUsername,

    #[error("Password is required")]
    MissingPassword,
}

impl LoginCommand {
    pub fn new(username: String, password: String) -> Result<Self, LoginCommandError> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(LoginCommandError::MissingUsername);
        }
        if password.is_empty() {
            return Err(LoginCommandError::MissingPassword);
        }
        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub actor: Actor,
    pub session: IssuedSession,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// Unknown username and wrong password are indistinguishable.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Account has been deactivated")]
    AccountInactive,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginOutput, LoginError>;
}
