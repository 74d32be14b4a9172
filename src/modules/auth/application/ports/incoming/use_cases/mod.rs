mod login;
mod logout;
mod resolve_session;
mod update_profile;

pub use login::{LoginCommand, LoginCommandError, LoginError, LoginOutput, LoginUseCase};
pub use logout::{LogoutError, LogoutUseCase};
pub use resolve_session::{ResolveSessionError, ResolveSessionUseCase};
pub use update_profile::{UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase};
