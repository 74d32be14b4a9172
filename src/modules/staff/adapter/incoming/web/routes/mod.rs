mod create_staff;
mod delete_staff;
mod get_staff;
mod list_staff;
mod update_staff;

pub use create_staff::*;
pub use delete_staff::*;
pub use get_staff::*;
pub use list_staff::*;
pub use update_staff::*;
