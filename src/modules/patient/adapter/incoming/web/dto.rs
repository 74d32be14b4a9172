use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::modules::patient::application::domain::entities::PatientInput;
use crate::modules::patient::application::ports::outgoing::PatientListFilter;
use crate::shared::api::PageParams;

/// Body of create and update. Medical fields are ignored for roles without
/// access to medical records.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PatientRequest {
    #[schema(example = "Maria")]
    pub first_name: String,
    #[schema(example = "Santos")]
    pub last_name: String,
    #[schema(example = "1990-04-12")]
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub medical_history: Option<String>,
    pub allergies: Option<String>,
    pub existing_condition: Option<String>,
    pub dentist_notes: Option<String>,
    pub assigned_dentist: Option<String>,
}

impl From<PatientRequest> for PatientInput {
    fn from(req: PatientRequest) -> Self {
        PatientInput {
            first_name: req.first_name,
            last_name: req.last_name,
            date_of_birth: req.date_of_birth,
            gender: req.gender,
            phone: req.phone,
            email: req.email,
            address: req.address,
            emergency_contact_name: req.emergency_contact_name,
            emergency_contact_phone: req.emergency_contact_phone,
            medical_history: req.medical_history,
            allergies: req.allergies,
            existing_condition: req.existing_condition,
            dentist_notes: req.dentist_notes,
            assigned_dentist: req.assigned_dentist,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PatientListQuery {
    /// Name or phone substring, or an exact patient id.
    pub search: Option<String>,
    pub gender: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl PatientListQuery {
    pub fn filter(&self) -> PatientListFilter {
        PatientListFilter {
            search: self.search.clone(),
            gender: self.gender.clone(),
        }
    }

    pub fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            per_page: self.per_page,
        }
    }
}
