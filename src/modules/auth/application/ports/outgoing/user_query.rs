use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::{Actor, Role, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQueryResult {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl UserQueryResult {
    pub fn to_actor(&self) -> Actor {
        Actor {
            id: self.id,
            username: self.username.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }

    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListFilter {
    /// Substring of username or full name, or an exact id when numeric.
    pub search: Option<String>,
    pub role: Option<Role>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError>;

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError>;

    /// Ordered by username.
    async fn list(&self, filter: &UserListFilter) -> Result<Vec<UserQueryResult>, UserQueryError>;

    async fn count_by_role(&self, role: Role) -> Result<u64, UserQueryError>;
}
