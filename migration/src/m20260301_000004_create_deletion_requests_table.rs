use sea_orm_migration::prelude::*;

use super::m20260301_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // patient_id carries no foreign key: approving a request removes the
        // patient while the request row stays as a terminal record.
        manager
            .create_table(
                Table::create()
                    .table(DeletionRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DeletionRequests::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DeletionRequests::PatientId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeletionRequests::PatientName)
                            .string_len(201)
                            .not_null(),
                    )
                    .col(ColumnDef::new(DeletionRequests::RequestedBy).integer().null())
                    .col(
                        ColumnDef::new(DeletionRequests::RequestedByName)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeletionRequests::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending")
                            .check(Expr::col(DeletionRequests::Status).is_in([
                                "pending", "approved", "denied",
                            ])),
                    )
                    .col(
                        ColumnDef::new(DeletionRequests::RequestedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(DeletionRequests::ApprovedBy).integer().null())
                    .col(
                        ColumnDef::new(DeletionRequests::ApprovedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deletion_requests_requested_by")
                            .from(DeletionRequests::Table, DeletionRequests::RequestedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deletion_requests_approved_by")
                            .from(DeletionRequests::Table, DeletionRequests::ApprovedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one pending request per patient
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_deletion_requests_pending_patient
                ON deletion_requests (patient_id)
                WHERE status = 'pending';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_deletion_requests_status_requested_at
                ON deletion_requests (status, requested_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_deletion_requests_pending_patient")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_deletion_requests_status_requested_at")
            .await?;

        manager
            .drop_table(Table::drop().table(DeletionRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DeletionRequests {
    Table,
    Id,
    PatientId,
    PatientName,
    RequestedBy,
    RequestedByName,
    Status,
    RequestedAt,
    ApprovedBy,
    ApprovedAt,
}
