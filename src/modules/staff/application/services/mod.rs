mod create_staff_service;
mod delete_staff_service;
mod get_staff_service;
mod list_staff_service;
mod update_staff_service;

pub use create_staff_service::CreateStaffService;
pub use delete_staff_service::DeleteStaffService;
pub use get_staff_service::GetStaffService;
pub use list_staff_service::ListStaffService;
pub use update_staff_service::UpdateStaffService;
