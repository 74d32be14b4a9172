use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{Capability, Role, UserId};
use crate::shared::validation::{normalize_optional, validate_email};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PatientId(i64);

impl PatientId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for PatientId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<PatientId> for i64 {
    fn from(id: PatientId) -> Self {
        id.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ──────────────────────────────────────────────────────────
// Record
// ──────────────────────────────────────────────────────────
//

/// Demographic and contact data, visible to every role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct PatientDetails {
    #[schema(example = "Maria")]
    pub first_name: String,
    #[schema(example = "Santos")]
    pub last_name: String,
    #[schema(value_type = Option<String>, format = Date, example = "1990-04-12")]
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
}

/// Fields restricted to roles with [`Capability::AccessMedicalRecords`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct MedicalRecord {
    pub medical_history: Option<String>,
    pub allergies: Option<String>,
    pub existing_condition: Option<String>,
    pub dentist_notes: Option<String>,
    pub assigned_dentist: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: PatientId,
    pub details: PatientDetails,
    pub medical: MedicalRecord,
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        self.details.full_name()
    }
}

impl PatientDetails {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Completed years between `dob` and `today`; `None` for a date in the future.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> Option<u32> {
    if dob > today {
        return None;
    }

    let mut years = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }

    u32::try_from(years).ok()
}

//
// ──────────────────────────────────────────────────────────
// Role projection
// ──────────────────────────────────────────────────────────
//

/// What a given role is allowed to see of a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PatientView {
    pub id: PatientId,
    #[serde(flatten)]
    pub details: PatientDetails,
    /// Derived from the date of birth at read time.
    pub age: Option<u32>,
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical: Option<MedicalRecord>,
}

pub fn project(patient: Patient, role: Role, today: NaiveDate) -> PatientView {
    let medical = role
        .can(Capability::AccessMedicalRecords)
        .then_some(patient.medical);

    PatientView {
        id: patient.id,
        age: patient.details.date_of_birth.and_then(|dob| age_on(dob, today)),
        details: patient.details,
        created_by: patient.created_by,
        created_at: patient.created_at,
        updated_at: patient.updated_at,
        medical,
    }
}

//
// ──────────────────────────────────────────────────────────
// Input validation
// ──────────────────────────────────────────────────────────
//

/// Raw create/update input, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientInput {
    pub first_name: String,
    pub last_name: String,
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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatientValidationError {
    #[error("First name and last name are required")]
    MissingName,

    #[error("Date of birth must be a date in YYYY-MM-DD format")]
    InvalidDateOfBirth,

    #[error("Date of birth cannot be in the future")]
    DateOfBirthInFuture,

    #[error("{0}")]
    InvalidEmail(String),
}

impl PatientInput {
    /// Trims everything, turns blanks into `None` and checks the name, date
    /// and email rules. The medical part is returned separately so the
    /// caller decides whether it may be used at all.
    pub fn validate(
        self,
        today: NaiveDate,
    ) -> Result<(PatientDetails, MedicalRecord), PatientValidationError> {
        let first_name = self.first_name.trim().to_string();
        let last_name = self.last_name.trim().to_string();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(PatientValidationError::MissingName);
        }

        let date_of_birth = match normalize_optional(self.date_of_birth) {
            Some(raw) => {
                let dob = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| PatientValidationError::InvalidDateOfBirth)?;
                if dob > today {
                    return Err(PatientValidationError::DateOfBirthInFuture);
                }
                Some(dob)
            }
            None => None,
        };

        let email = normalize_optional(self.email);
        if let Some(email) = &email {
            validate_email(email).map_err(PatientValidationError::InvalidEmail)?;
        }

        let details = PatientDetails {
            first_name,
            last_name,
            date_of_birth,
            gender: normalize_optional(self.gender),
            phone: normalize_optional(self.phone),
            email,
            address: normalize_optional(self.address),
            emergency_contact_name: normalize_optional(self.emergency_contact_name),
            emergency_contact_phone: normalize_optional(self.emergency_contact_phone),
        };

        let medical = MedicalRecord {
            medical_history: normalize_optional(self.medical_history),
            allergies: normalize_optional(self.allergies),
            existing_condition: normalize_optional(self.existing_condition),
            dentist_notes: normalize_optional(self.dentist_notes),
            assigned_dentist: normalize_optional(self.assigned_dentist),
        };

        Ok((details, medical))
    }
}
