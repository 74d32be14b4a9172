use sea_orm::entity::prelude::*;

use crate::modules::deletion_request::application::domain::entities::DeletionStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RequestStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "denied")]
    Denied,
}

impl From<DeletionStatus> for RequestStatus {
    fn from(status: DeletionStatus) -> Self {
        match status {
            DeletionStatus::Pending => RequestStatus::Pending,
            DeletionStatus::Approved => RequestStatus::Approved,
            DeletionStatus::Denied => RequestStatus::Denied,
        }
    }
}

impl From<RequestStatus> for DeletionStatus {
    fn from(status: RequestStatus) -> Self {
        match status {
            RequestStatus::Pending => DeletionStatus::Pending,
            RequestStatus::Approved => DeletionStatus::Approved,
            RequestStatus::Denied => DeletionStatus::Denied,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "deletion_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub patient_id: i64,
    pub patient_name: String,
    pub requested_by: Option<i64>,
    pub requested_by_name: String,
    pub status: RequestStatus,
    pub requested_at: DateTimeUtc,
    pub approved_by: Option<i64>,
    pub approved_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
