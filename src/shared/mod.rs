pub mod api;
pub mod database;
pub mod pagination;
pub mod validation;
