pub mod basic_password_policy;
pub mod bootstrap_manager;
pub mod login_service;
pub mod logout_service;
pub mod resolve_session_service;
pub mod token_hasher;
pub mod update_profile_service;

pub use basic_password_policy::BasicPasswordPolicy;
pub use login_service::LoginService;
pub use logout_service::LogoutService;
pub use resolve_session_service::ResolveSessionService;
pub use update_profile_service::UpdateProfileService;
