use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use std::sync::Arc;

use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel, UserRole,
};
use crate::auth::application::domain::entities::{Role, UserId};
use crate::auth::application::ports::outgoing::user_query::{
    UserListFilter, UserQuery, UserQueryError, UserQueryResult,
};
use crate::shared::database::contains_literal;

#[derive(Clone, Debug)]
pub struct UserQuerySqlite {
    db: Arc<DatabaseConnection>,
}

impl UserQuerySqlite {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn map_to_query_result(model: UserModel) -> UserQueryResult {
    UserQueryResult {
        id: UserId::from(model.id),
        username: model.username,
        password_hash: model.password_hash,
        full_name: model.full_name,
        email: model.email,
        role: Role::from(model.role),
        is_active: model.is_active,
        created_at: model.created_at,
    }
}

fn search_condition(term: &str) -> Condition {
    let mut condition = Condition::any()
        .add(contains_literal(UserColumn::Username, term))
        .add(contains_literal(UserColumn::FullName, term));

    if let Ok(id) = term.parse::<i64>() {
        condition = condition.add(UserColumn::Id.eq(id));
    }

    condition
}

#[async_trait]
impl UserQuery for UserQuerySqlite {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(map_to_query_result))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(map_to_query_result))
    }

    async fn list(&self, filter: &UserListFilter) -> Result<Vec<UserQueryResult>, UserQueryError> {
        let mut query = UserEntity::find();

        if let Some(term) = filter.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            query = query.filter(search_condition(term));
        }
        if let Some(role) = filter.role {
            query = query.filter(UserColumn::Role.eq(UserRole::from(role)));
        }
        if let Some(active) = filter.active {
            query = query.filter(UserColumn::IsActive.eq(active));
        }

        let users = query
            .order_by_asc(UserColumn::Username)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(users.into_iter().map(map_to_query_result).collect())
    }

    async fn count_by_role(&self, role: Role) -> Result<u64, UserQueryError> {
        UserEntity::find()
            .filter(UserColumn::Role.eq(UserRole::from(role)))
            .count(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }
}
