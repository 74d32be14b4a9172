use std::sync::Arc;

use crate::modules::staff::application::ports::incoming::use_cases::{
    CreateStaffUseCase, DeleteStaffUseCase, GetStaffUseCase, ListStaffUseCase,
    UpdateStaffUseCase,
};

#[derive(Clone)]
pub struct StaffUseCases {
    pub create: Arc<dyn CreateStaffUseCase + Send + Sync>,
    pub get: Arc<dyn GetStaffUseCase + Send + Sync>,
    pub list: Arc<dyn ListStaffUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateStaffUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteStaffUseCase + Send + Sync>,
}
