pub mod patient_query;
pub mod patient_repository;

pub use patient_query::{PatientListFilter, PatientQuery, PatientQueryError};
pub use patient_repository::{
    NewPatient, PatientChanges, PatientRepository, PatientRepositoryError,
};
