pub mod audit;
pub mod auth;
pub mod backup;
pub mod dashboard;
pub mod deletion_request;
pub mod patient;
pub mod staff;
