use std::sync::Arc;

use crate::modules::patient::application::ports::incoming::use_cases::{
    CreatePatientUseCase, DeletePatientUseCase, GetPatientUseCase, ListPatientsUseCase,
    UpdatePatientUseCase,
};

#[derive(Clone)]
pub struct PatientUseCases {
    pub create: Arc<dyn CreatePatientUseCase + Send + Sync>,
    pub get: Arc<dyn GetPatientUseCase + Send + Sync>,
    pub list: Arc<dyn ListPatientsUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePatientUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePatientUseCase + Send + Sync>,
}
