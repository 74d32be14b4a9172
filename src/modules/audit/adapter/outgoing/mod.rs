pub mod audit_log_repository_sqlite;
pub mod sea_orm_entity;

pub use audit_log_repository_sqlite::{insert_audit_entry, AuditLogRepositorySqlite};
