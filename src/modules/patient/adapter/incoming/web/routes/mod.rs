mod create_patient;
mod delete_patient;
mod get_patient;
mod list_patients;
mod update_patient;

pub use create_patient::*;
pub use delete_patient::*;
pub use get_patient::*;
pub use list_patients::*;
pub use update_patient::*;
