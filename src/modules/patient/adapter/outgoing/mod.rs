pub mod patient_query_sqlite;
pub mod patient_repository_sqlite;
pub mod sea_orm_entity;

pub use patient_query_sqlite::PatientQuerySqlite;
pub use patient_repository_sqlite::PatientRepositorySqlite;
