use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    NotSet, QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;

use super::sea_orm_entity::audit_logs::{self, ActiveModel, Column, Entity};
use crate::auth::application::domain::entities::UserId;
use crate::modules::audit::application::domain::entities::{
    AuditAction, AuditEntry, AuditLogFilter, NewAuditEntry, MAX_AUDIT_LIMIT,
};
use crate::modules::audit::application::ports::outgoing::{
    AuditLogRepository, AuditLogRepositoryError,
};

#[derive(Clone)]
pub struct AuditLogRepositorySqlite {
    db: Arc<DatabaseConnection>,
}

impl AuditLogRepositorySqlite {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Writes one audit row on `conn`, which may be an open transaction so the
/// entry commits or rolls back together with the change it describes.
pub async fn insert_audit_entry<C>(conn: &C, entry: NewAuditEntry) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    Entity::insert(to_active_model(entry)).exec(conn).await?;
    Ok(())
}

#[async_trait]
impl AuditLogRepository for AuditLogRepositorySqlite {
    async fn append(&self, entry: NewAuditEntry) -> Result<AuditEntry, AuditLogRepositoryError> {
        let model = to_active_model(entry)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        model_to_entry(model)
    }

    async fn list(
        &self,
        filter: &AuditLogFilter,
    ) -> Result<Vec<AuditEntry>, AuditLogRepositoryError> {
        let mut query = Entity::find();

        if let Some(user_id) = filter.user_id {
            query = query.filter(Column::UserId.eq(user_id.value()));
        }

        if let Some(action) = filter.action {
            query = query.filter(Column::ActionType.eq(action.as_str()));
        }

        let models = query
            .order_by_desc(Column::Id)
            .limit(filter.limit.clamp(1, MAX_AUDIT_LIMIT))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_entry).collect()
    }
}

fn to_active_model(entry: NewAuditEntry) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        user_id: Set(entry.user_id.map(i64::from)),
        username: Set(entry.username),
        action_type: Set(entry.action.as_str().to_string()),
        details: Set(entry.details),
        timestamp: Set(Utc::now()),
    }
}

fn model_to_entry(model: audit_logs::Model) -> Result<AuditEntry, AuditLogRepositoryError> {
    let action = model
        .action_type
        .parse::<AuditAction>()
        .map_err(|e| AuditLogRepositoryError::DatabaseError(e.to_string()))?;

    Ok(AuditEntry {
        id: model.id,
        user_id: model.user_id.map(UserId::from),
        username: model.username,
        action,
        details: model.details,
        timestamp: model.timestamp,
    })
}

fn map_db_err(e: DbErr) -> AuditLogRepositoryError {
    AuditLogRepositoryError::DatabaseError(e.to_string())
}
