use async_trait::async_trait;

use crate::auth::application::domain::entities::{authorize, Actor, Capability, UserId};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::staff::application::domain::entities::StaffMember;
use crate::modules::staff::application::ports::incoming::use_cases::{
    GetStaffError, GetStaffUseCase,
};

pub struct GetStaffService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> GetStaffService<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> GetStaffUseCase for GetStaffService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, actor: &Actor, id: UserId) -> Result<StaffMember, GetStaffError> {
        authorize(actor, Capability::ManageStaff)?;

        self.user_query
            .find_by_id(id)
            .await?
            .map(StaffMember::from)
            .ok_or(GetStaffError::NotFound)
    }
}
