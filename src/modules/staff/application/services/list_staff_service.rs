use async_trait::async_trait;

use crate::auth::application::domain::entities::{authorize, Actor, Capability};
use crate::auth::application::ports::outgoing::{UserListFilter, UserQuery};
use crate::modules::staff::application::domain::entities::StaffMember;
use crate::modules::staff::application::ports::incoming::use_cases::{
    ListStaffError, ListStaffUseCase,
};
use crate::shared::validation::normalize_optional;

pub struct ListStaffService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> ListStaffService<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> ListStaffUseCase for ListStaffService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        filter: UserListFilter,
    ) -> Result<Vec<StaffMember>, ListStaffError> {
        authorize(actor, Capability::ManageStaff)?;

        let filter = UserListFilter {
            search: normalize_optional(filter.search),
            ..filter
        };

        let users = self.user_query.list(&filter).await?;
        Ok(users.into_iter().map(StaffMember::from).collect())
    }
}
