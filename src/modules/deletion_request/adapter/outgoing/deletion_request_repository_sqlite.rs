use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    Set, SqlErr, TransactionTrait,
};
use std::sync::Arc;

use super::deletion_request_query_sqlite::map_to_request;
use super::sea_orm_entity::deletion_requests::{
    ActiveModel as RequestActiveModel, Column as RequestColumn, Entity as RequestEntity,
    RequestStatus,
};
use crate::auth::application::domain::entities::UserId;
use crate::modules::audit::adapter::outgoing::insert_audit_entry;
use crate::modules::audit::application::domain::entities::NewAuditEntry;
use crate::modules::deletion_request::application::domain::entities::{
    Decision, DeletionRequest, DeletionRequestId, DeletionStatus,
};
use crate::modules::deletion_request::application::ports::outgoing::{
    DeletionRequestRepository, DeletionRequestRepositoryError, NewDeletionRequest,
};
use crate::modules::patient::adapter::outgoing::sea_orm_entity::patients::Entity as PatientEntity;

#[derive(Clone, Debug)]
pub struct DeletionRequestRepositorySqlite {
    db: Arc<DatabaseConnection>,
}

impl DeletionRequestRepositorySqlite {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: DbErr) -> DeletionRequestRepositoryError {
    DeletionRequestRepositoryError::DatabaseError(e.to_string())
}

/// The partial unique index on pending rows surfaces as a constraint error.
fn map_insert_err(e: DbErr) -> DeletionRequestRepositoryError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
        return DeletionRequestRepositoryError::AlreadyRequested;
    }
    if e.to_string().to_lowercase().contains("unique constraint") {
        return DeletionRequestRepositoryError::AlreadyRequested;
    }
    db_err(e)
}

#[async_trait]
impl DeletionRequestRepository for DeletionRequestRepositorySqlite {
    async fn create_pending(
        &self,
        request: NewDeletionRequest,
        audit: NewAuditEntry,
    ) -> Result<DeletionRequest, DeletionRequestRepositoryError> {
        let active = RequestActiveModel {
            id: NotSet,
            patient_id: Set(request.patient_id.value()),
            patient_name: Set(request.patient_name),
            requested_by: Set(Some(request.requested_by.value())),
            requested_by_name: Set(request.requested_by_name),
            status: Set(RequestStatus::Pending),
            requested_at: Set(Utc::now()),
            approved_by: Set(None),
            approved_at: Set(None),
        };

        let txn = self.db.begin().await.map_err(db_err)?;
        let inserted = active.insert(&txn).await.map_err(map_insert_err)?;
        insert_audit_entry(&txn, audit).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        Ok(map_to_request(inserted))
    }

    async fn decide(
        &self,
        id: DeletionRequestId,
        decision: Decision,
        reviewer: UserId,
        audit: NewAuditEntry,
    ) -> Result<DeletionRequest, DeletionRequestRepositoryError> {
        let target = match decision {
            Decision::Approve => RequestStatus::Approved,
            Decision::Deny => RequestStatus::Denied,
        };

        let txn = self.db.begin().await.map_err(db_err)?;

        // Only a row that is still pending moves; a concurrent reviewer that
        // got there first leaves zero rows affected here.
        let result = RequestEntity::update_many()
            .set(RequestActiveModel {
                status: Set(target),
                approved_by: Set(Some(reviewer.value())),
                approved_at: Set(Some(Utc::now())),
                ..Default::default()
            })
            .filter(RequestColumn::Id.eq(id.value()))
            .filter(RequestColumn::Status.eq(RequestStatus::Pending))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        let row = RequestEntity::find_by_id(id.value())
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(DeletionRequestRepositoryError::NotFound)?;

        if result.rows_affected == 0 {
            return Err(DeletionRequestRepositoryError::AlreadyDecided(
                DeletionStatus::from(row.status),
            ));
        }

        if decision == Decision::Approve {
            // The patient may already be gone; approval still stands.
            PatientEntity::delete_by_id(row.patient_id)
                .exec(&txn)
                .await
                .map_err(db_err)?;
        }

        insert_audit_entry(&txn, audit).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        Ok(map_to_request(row))
    }
}
