mod current_user;
mod login_user;
mod logout_user;
mod update_profile;

pub use current_user::*;
pub use login_user::*;
pub use logout_user::*;
pub use update_profile::*;
