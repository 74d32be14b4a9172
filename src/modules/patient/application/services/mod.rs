mod create_patient_service;
mod delete_patient_service;
mod get_patient_service;
mod list_patients_service;
mod update_patient_service;

pub use create_patient_service::CreatePatientService;
pub use delete_patient_service::DeletePatientService;
pub use get_patient_service::GetPatientService;
pub use list_patients_service::ListPatientsService;
pub use update_patient_service::UpdatePatientService;
