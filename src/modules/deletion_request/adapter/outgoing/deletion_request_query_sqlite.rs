use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;

use super::sea_orm_entity::deletion_requests::{
    Column as RequestColumn, Entity as RequestEntity, Model as RequestModel, RequestStatus,
};
use crate::auth::application::domain::entities::UserId;
use crate::modules::deletion_request::application::domain::entities::{
    DeletionRequest, DeletionRequestId,
};
use crate::modules::deletion_request::application::ports::outgoing::{
    DeletionRequestQuery, DeletionRequestQueryError,
};
use crate::modules::patient::application::domain::entities::PatientId;
use crate::shared::database::contains_literal;

#[derive(Clone, Debug)]
pub struct DeletionRequestQuerySqlite {
    db: Arc<DatabaseConnection>,
}

impl DeletionRequestQuerySqlite {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn map_to_request(model: RequestModel) -> DeletionRequest {
    DeletionRequest {
        id: DeletionRequestId::from(model.id),
        patient_id: PatientId::from(model.patient_id),
        patient_name: model.patient_name,
        requested_by: model.requested_by.map(UserId::from),
        requested_by_name: model.requested_by_name,
        status: model.status.into(),
        requested_at: model.requested_at,
        approved_by: model.approved_by.map(UserId::from),
        approved_at: model.approved_at,
    }
}

fn pending_select(search: Option<&str>) -> Select<RequestEntity> {
    let mut select = RequestEntity::find().filter(RequestColumn::Status.eq(RequestStatus::Pending));

    if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
        let mut any = Condition::any().add(contains_literal(RequestColumn::PatientName, term));
        if let Ok(id) = term.parse::<i64>() {
            any = any
                .add(RequestColumn::Id.eq(id))
                .add(RequestColumn::PatientId.eq(id));
        }
        select = select.filter(any);
    }

    select.order_by_desc(RequestColumn::Id)
}

fn db_err(e: sea_orm::DbErr) -> DeletionRequestQueryError {
    DeletionRequestQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl DeletionRequestQuery for DeletionRequestQuerySqlite {
    async fn find_by_id(
        &self,
        id: DeletionRequestId,
    ) -> Result<Option<DeletionRequest>, DeletionRequestQueryError> {
        let row = RequestEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(row.map(map_to_request))
    }

    async fn find_pending_for_patient(
        &self,
        patient_id: PatientId,
    ) -> Result<Option<DeletionRequest>, DeletionRequestQueryError> {
        let row = RequestEntity::find()
            .filter(RequestColumn::PatientId.eq(patient_id.value()))
            .filter(RequestColumn::Status.eq(RequestStatus::Pending))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(row.map(map_to_request))
    }

    async fn list_pending(
        &self,
        search: Option<String>,
        limit: Option<u64>,
    ) -> Result<Vec<DeletionRequest>, DeletionRequestQueryError> {
        let mut select = pending_select(search.as_deref());
        if let Some(limit) = limit {
            select = select.limit(limit);
        }

        let rows = select.all(&*self.db).await.map_err(db_err)?;
        Ok(rows.into_iter().map(map_to_request).collect())
    }

    async fn count_pending(&self) -> Result<u64, DeletionRequestQueryError> {
        RequestEntity::find()
            .filter(RequestColumn::Status.eq(RequestStatus::Pending))
            .count(&*self.db)
            .await
            .map_err(db_err)
    }
}
