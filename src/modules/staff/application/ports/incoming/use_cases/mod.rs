mod create_staff;
mod delete_staff;
mod get_staff;
mod list_staff;
mod update_staff;

pub use create_staff::{CreateStaffCommand, CreateStaffError, CreateStaffUseCase};
pub use delete_staff::{DeleteStaffError, DeleteStaffUseCase};
pub use get_staff::{GetStaffError, GetStaffUseCase};
pub use list_staff::{ListStaffError, ListStaffUseCase};
pub use update_staff::{UpdateStaffCommand, UpdateStaffError, UpdateStaffUseCase};
