mod create_patient;
mod delete_patient;
mod get_patient;
mod list_patients;
mod update_patient;

pub use create_patient::{CreatePatientError, CreatePatientUseCase};
pub use delete_patient::{DeletePatientError, DeletePatientUseCase};
pub use get_patient::{GetPatientError, GetPatientUseCase};
pub use list_patients::{ListPatientsError, ListPatientsUseCase};
pub use update_patient::{UpdatePatientError, UpdatePatientUseCase};
