use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Set, TransactionTrait,
};
use std::sync::Arc;

use super::patient_query_sqlite::map_to_patient;
use super::sea_orm_entity::patients::{
    ActiveModel as PatientActiveModel, Entity as PatientEntity,
};
use crate::modules::audit::adapter::outgoing::insert_audit_entry;
use crate::modules::audit::application::domain::entities::NewAuditEntry;
use crate::modules::patient::application::domain::entities::{
    MedicalRecord, Patient, PatientDetails, PatientId,
};
use crate::modules::patient::application::ports::outgoing::{
    NewPatient, PatientChanges, PatientRepository, PatientRepositoryError,
};

#[derive(Clone, Debug)]
pub struct PatientRepositorySqlite {
    db: Arc<DatabaseConnection>,
}

impl PatientRepositorySqlite {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: DbErr) -> PatientRepositoryError {
    PatientRepositoryError::DatabaseError(e.to_string())
}

fn set_details(model: &mut PatientActiveModel, details: PatientDetails) {
    model.first_name = Set(details.first_name);
    model.last_name = Set(details.last_name);
    model.date_of_birth = Set(details.date_of_birth);
    model.gender = Set(details.gender);
    model.phone = Set(details.phone);
    model.email = Set(details.email);
    model.address = Set(details.address);
    model.emergency_contact_name = Set(details.emergency_contact_name);
    model.emergency_contact_phone = Set(details.emergency_contact_phone);
}

fn set_medical(model: &mut PatientActiveModel, medical: MedicalRecord) {
    model.medical_history = Set(medical.medical_history);
    model.allergies = Set(medical.allergies);
    model.existing_condition = Set(medical.existing_condition);
    model.dentist_notes = Set(medical.dentist_notes);
    model.assigned_dentist = Set(medical.assigned_dentist);
}

#[async_trait]
impl PatientRepository for PatientRepositorySqlite {
    async fn create(
        &self,
        patient: NewPatient,
        audit: NewAuditEntry,
    ) -> Result<Patient, PatientRepositoryError> {
        let now = Utc::now();
        let mut active = PatientActiveModel {
            id: NotSet,
            created_by: Set(Some(patient.created_by.value())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        set_details(&mut active, patient.details);
        set_medical(&mut active, patient.medical);

        let txn = self.db.begin().await.map_err(db_err)?;
        let inserted = active.insert(&txn).await.map_err(db_err)?;
        insert_audit_entry(&txn, audit).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        Ok(map_to_patient(inserted))
    }

    async fn update(
        &self,
        id: PatientId,
        changes: PatientChanges,
        audit: NewAuditEntry,
    ) -> Result<Patient, PatientRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = PatientEntity::find_by_id(id.value())
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(PatientRepositoryError::NotFound)?;

        let mut active: PatientActiveModel = existing.into();
        set_details(&mut active, changes.details);
        if let Some(medical) = changes.medical {
            set_medical(&mut active, medical);
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(&txn).await.map_err(db_err)?;
        insert_audit_entry(&txn, audit).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        Ok(map_to_patient(updated))
    }

    async fn delete(
        &self,
        id: PatientId,
        audit: NewAuditEntry,
    ) -> Result<(), PatientRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let result = PatientEntity::delete_by_id(id.value())
            .exec(&txn)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(PatientRepositoryError::NotFound);
        }

        insert_audit_entry(&txn, audit).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        Ok(())
    }
}
