use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::application::domain::entities::UserId;

/// Claims carried by the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: i64,
    pub jti: String,
    /// Anti-forgery token echoed back in the `X-CSRF-Token` header.
    pub csrf: String,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
}

impl SessionClaims {
    pub fn user_id(&self) -> UserId {
        UserId::from(self.sub)
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSession {
    pub token: String,
    pub csrf_token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingError(String),

    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token issued by another service")]
    InvalidIssuer,

    #[error("Malformed token")]
    MalformedToken,
}

pub trait TokenProvider: Send + Sync {
    fn issue_session(&self, user_id: UserId) -> Result<IssuedSession, TokenError>;
    fn verify_session(&self, token: &str) -> Result<SessionClaims, TokenError>;
}
