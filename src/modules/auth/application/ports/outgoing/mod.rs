pub mod password_hasher;
pub mod session_revocation;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use session_revocation::{SessionRevocationError, SessionRevocationRepository};
pub use token_provider::{IssuedSession, SessionClaims, TokenError, TokenProvider};
pub use user_query::{UserListFilter, UserQuery, UserQueryError, UserQueryResult};
pub use user_repository::{NewUser, UserRepository, UserRepositoryError, UserUpdate};
