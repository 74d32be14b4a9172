use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::UserListFilter;
use crate::modules::staff::application::ports::incoming::use_cases::{
    CreateStaffCommand, UpdateStaffCommand,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StaffStatus {
    Active,
    Inactive,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StaffListQuery {
    /// Username or full-name substring, or an exact user id
    pub search: Option<String>,
    #[param(inline)]
    pub role: Option<Role>,
    #[param(inline)]
    pub status: Option<StaffStatus>,
}

impl StaffListQuery {
    pub fn into_filter(self) -> UserListFilter {
        UserListFilter {
            search: self.search,
            role: self.role,
            active: self.status.map(|s| s == StaffStatus::Active),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStaffRequest {
    #[schema(example = "nurse01")]
    pub username: String,
    #[schema(example = "front-desk-pass")]
    pub password: String,
    #[schema(example = "Ana Cruz")]
    pub full_name: Option<String>,
    pub email: Option<String>,
    /// Defaults to `staff`
    pub role: Option<Role>,
}

impl From<CreateStaffRequest> for CreateStaffCommand {
    fn from(req: CreateStaffRequest) -> Self {
        CreateStaffCommand {
            username: req.username,
            password: req.password,
            full_name: req.full_name,
            email: req.email,
            role: req.role,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStaffRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    /// Leave empty to keep the current password
    pub new_password: Option<String>,
}

impl From<UpdateStaffRequest> for UpdateStaffCommand {
    fn from(req: UpdateStaffRequest) -> Self {
        UpdateStaffCommand {
            full_name: req.full_name,
            email: req.email,
            role: req.role,
            is_active: req.is_active,
            new_password: req.new_password,
        }
    }
}
