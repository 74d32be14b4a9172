pub mod auth;

pub use auth::{AuthenticatedUser, CSRF_HEADER};
