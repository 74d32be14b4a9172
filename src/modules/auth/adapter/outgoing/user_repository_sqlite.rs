use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Set, SqlErr,
    TransactionTrait,
};
use std::sync::Arc;

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Entity as UserEntity, UserRole};
use super::user_query_sqlite::map_to_query_result;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::user_query::UserQueryResult;
use crate::auth::application::ports::outgoing::user_repository::{
    NewUser, UserRepository, UserRepositoryError, UserUpdate,
};
use crate::modules::audit::adapter::outgoing::insert_audit_entry;
use crate::modules::audit::application::domain::entities::NewAuditEntry;

#[derive(Clone, Debug)]
pub struct UserRepositorySqlite {
    db: Arc<DatabaseConnection>,
}

impl UserRepositorySqlite {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
        return UserRepositoryError::UsernameAlreadyExists;
    }
    if e.to_string().to_lowercase().contains("unique constraint") {
        return UserRepositoryError::UsernameAlreadyExists;
    }
    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositorySqlite {
    async fn create(
        &self,
        user: NewUser,
        audit: NewAuditEntry,
    ) -> Result<UserQueryResult, UserRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let active_user = UserActiveModel {
            id: NotSet,
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            full_name: Set(user.full_name),
            email: Set(user.email),
            role: Set(UserRole::from(user.role)),
            is_active: Set(user.is_active),
            created_at: Set(Utc::now()),
        };

        let inserted = active_user.insert(&txn).await.map_err(map_db_err)?;
        insert_audit_entry(&txn, audit).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(map_to_query_result(inserted))
    }

    async fn update(
        &self,
        user_id: UserId,
        changes: UserUpdate,
        audit: NewAuditEntry,
    ) -> Result<UserQueryResult, UserRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let user = UserEntity::find_by_id(user_id.value())
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(UserRepositoryError::NotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.full_name = Set(changes.full_name);
        active_user.email = Set(changes.email);
        if let Some(role) = changes.role {
            active_user.role = Set(UserRole::from(role));
        }
        if let Some(is_active) = changes.is_active {
            active_user.is_active = Set(is_active);
        }
        if let Some(password_hash) = changes.password_hash {
            active_user.password_hash = Set(password_hash);
        }

        let updated = active_user.update(&txn).await.map_err(map_db_err)?;
        insert_audit_entry(&txn, audit).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(map_to_query_result(updated))
    }

    async fn delete(&self, user_id: UserId, audit: NewAuditEntry) -> Result<(), UserRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result = UserEntity::delete_by_id(user_id.value())
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            // Dropping the transaction rolls it back.
            return Err(UserRepositoryError::NotFound);
        }

        insert_audit_entry(&txn, audit).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::user_query_sqlite::UserQuerySqlite;
    use crate::auth::application::domain::entities::Role;
    use crate::auth::application::ports::outgoing::UserQuery;
    use crate::modules::audit::adapter::outgoing::AuditLogRepositorySqlite;
    use crate::modules::audit::application::domain::entities::{AuditAction, AuditLogFilter};
    use crate::modules::audit::application::ports::outgoing::AuditLogRepository;
    use crate::shared::database::open_in_memory;

    struct Fixture {
        repo: UserRepositorySqlite,
        query: UserQuerySqlite,
        audit: AuditLogRepositorySqlite,
    }

    async fn fixture() -> Fixture {
        let db = Arc::new(open_in_memory().await.expect("in-memory database"));
        Fixture {
            repo: UserRepositorySqlite::new(db.clone()),
            query: UserQuerySqlite::new(db.clone()),
            audit: AuditLogRepositorySqlite::new(db),
        }
    }

    fn new_user(username: &str, role: Role) -> NewUser {
        NewUser {
            username: username.to_string(),
            password_hash: "hash".to_string(),
            full_name: Some("Someone".to_string()),
            email: None,
            role,
            is_active: true,
        }
    }

    fn add_staff(details: &str) -> NewAuditEntry {
        NewAuditEntry::system(AuditAction::AddStaff, details)
    }

    async fn audit_count(fx: &Fixture) -> usize {
        fx.audit.list(&AuditLogFilter::default()).await.unwrap().len()
    }

    #[tokio::test]
    async fn create_writes_user_and_audit_entry() {
        let fx = fixture().await;

        let created = fx
            .repo
            .create(new_user("nurse01", Role::Staff), add_staff("Added nurse01"))
            .await
            .unwrap();

        assert_eq!(created.username, "nurse01");
        assert_eq!(created.role, Role::Staff);

        let found = fx.query.find_by_username("nurse01").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(audit_count(&fx).await, 1);
    }

    #[tokio::test]
    async fn duplicate_username_leaves_no_audit_entry() {
        let fx = fixture().await;
        fx.repo
            .create(new_user("nurse01", Role::Staff), add_staff("first"))
            .await
            .unwrap();

        let err = fx
            .repo
            .create(new_user("nurse01", Role::Dentist), add_staff("second"))
            .await
            .unwrap_err();

        assert_eq!(err, UserRepositoryError::UsernameAlreadyExists);
        assert_eq!(audit_count(&fx).await, 1);
    }

    #[tokio::test]
    async fn update_changes_only_requested_fields() {
        let fx = fixture().await;
        let created = fx
            .repo
            .create(new_user("dr_lee", Role::Dentist), add_staff("seed"))
            .await
            .unwrap();

        let updated = fx
            .repo
            .update(
                created.id,
                UserUpdate {
                    full_name: Some("Dr. Lee".into()),
                    email: Some("lee@clinic.example".into()),
                    is_active: Some(false),
                    ..UserUpdate::default()
                },
                NewAuditEntry::system(AuditAction::EditStaff, "edit"),
            )
            .await
            .unwrap();

        assert_eq!(updated.full_name.as_deref(), Some("Dr. Lee"));
        assert_eq!(updated.role, Role::Dentist);
        assert!(!updated.is_active);
        assert_eq!(updated.password_hash, "hash");
        assert_eq!(audit_count(&fx).await, 2);
    }

    #[tokio::test]
    async fn update_missing_user_is_not_found() {
        let fx = fixture().await;

        let err = fx
            .repo
            .update(
                UserId::from(404),
                UserUpdate::default(),
                NewAuditEntry::system(AuditAction::EditStaff, "edit"),
            )
            .await
            .unwrap_err();

        assert_eq!(err, UserRepositoryError::NotFound);
        assert_eq!(audit_count(&fx).await, 0);
    }

    #[tokio::test]
    async fn delete_removes_user_and_audits_once() {
        let fx = fixture().await;
        let created = fx
            .repo
            .create(new_user("temp", Role::Staff), add_staff("seed"))
            .await
            .unwrap();

        fx.repo
            .delete(
                created.id,
                NewAuditEntry::system(AuditAction::DeleteStaff, "bye"),
            )
            .await
            .unwrap();

        assert!(fx.query.find_by_id(created.id).await.unwrap().is_none());
        assert_eq!(audit_count(&fx).await, 2);

        let again = fx
            .repo
            .delete(
                created.id,
                NewAuditEntry::system(AuditAction::DeleteStaff, "bye"),
            )
            .await
            .unwrap_err();
        assert_eq!(again, UserRepositoryError::NotFound);
        assert_eq!(audit_count(&fx).await, 2);
    }

    #[tokio::test]
    async fn count_by_role_counts_only_that_role() {
        let fx = fixture().await;
        for (name, role) in [("a", Role::Staff), ("b", Role::Staff), ("c", Role::Manager)] {
            fx.repo
                .create(new_user(&format!("user_{name}"), role), add_staff("seed"))
                .await
                .unwrap();
        }

        assert_eq!(fx.query.count_by_role(Role::Staff).await.unwrap(), 2);
        assert_eq!(fx.query.count_by_role(Role::Admin).await.unwrap(), 0);

        let staff = fx
            .query
            .list(&crate::auth::application::ports::outgoing::UserListFilter {
                role: Some(Role::Staff),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(staff.len(), 2);
        assert_eq!(staff[0].username, "user_a");
    }
}
