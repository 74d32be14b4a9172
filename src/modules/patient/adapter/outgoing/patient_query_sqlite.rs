use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;

use super::sea_orm_entity::patients::{
    Column as PatientColumn, Entity as PatientEntity, Model as PatientModel,
};
use crate::auth::application::domain::entities::UserId;
use crate::modules::patient::application::domain::entities::{
    MedicalRecord, Patient, PatientDetails, PatientId,
};
use crate::modules::patient::application::ports::outgoing::{
    PatientListFilter, PatientQuery, PatientQueryError,
};
use crate::shared::database::contains_literal;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Clone, Debug)]
pub struct PatientQuerySqlite {
    db: Arc<DatabaseConnection>,
}

impl PatientQuerySqlite {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn map_to_patient(model: PatientModel) -> Patient {
    Patient {
        id: PatientId::from(model.id),
        details: PatientDetails {
            first_name: model.first_name,
            last_name: model.last_name,
            date_of_birth: model.date_of_birth,
            gender: model.gender,
            phone: model.phone,
            email: model.email,
            address: model.address,
            emergency_contact_name: model.emergency_contact_name,
            emergency_contact_phone: model.emergency_contact_phone,
        },
        medical: MedicalRecord {
            medical_history: model.medical_history,
            allergies: model.allergies,
            existing_condition: model.existing_condition,
            dentist_notes: model.dentist_notes,
            assigned_dentist: model.assigned_dentist,
        },
        created_by: model.created_by.map(UserId::from),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn filter_condition(filter: &PatientListFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(term) = filter.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        let mut any = Condition::any()
            .add(contains_literal(PatientColumn::FirstName, term))
            .add(contains_literal(PatientColumn::LastName, term))
            .add(contains_literal(PatientColumn::Phone, term));
        if let Ok(id) = term.parse::<i64>() {
            any = any.add(PatientColumn::Id.eq(id));
        }
        condition = condition.add(any);
    }

    if let Some(gender) = filter.gender.as_deref().map(str::trim).filter(|g| !g.is_empty()) {
        condition = condition.add(PatientColumn::Gender.eq(gender));
    }

    condition
}

fn db_err(e: sea_orm::DbErr) -> PatientQueryError {
    PatientQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl PatientQuery for PatientQuerySqlite {
    async fn find_by_id(&self, id: PatientId) -> Result<Option<Patient>, PatientQueryError> {
        let patient = PatientEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(patient.map(map_to_patient))
    }

    async fn list(
        &self,
        filter: &PatientListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Patient>, PatientQueryError> {
        let condition = filter_condition(filter);

        let total = PatientEntity::find()
            .filter(condition.clone())
            .count(&*self.db)
            .await
            .map_err(db_err)?;

        let rows = PatientEntity::find()
            .filter(condition)
            .order_by_desc(PatientColumn::Id)
            .offset(page.offset())
            .limit(page.per_page)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(PageResult {
            items: rows.into_iter().map(map_to_patient).collect(),
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn count(&self) -> Result<u64, PatientQueryError> {
        PatientEntity::find().count(&*self.db).await.map_err(db_err)
    }

    async fn recent(&self, limit: u64) -> Result<Vec<Patient>, PatientQueryError> {
        let rows = PatientEntity::find()
            .order_by_desc(PatientColumn::Id)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(map_to_patient).collect())
    }
}
