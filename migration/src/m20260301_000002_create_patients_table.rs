use sea_orm_migration::prelude::*;

use super::m20260301_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Patients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Patients::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Patients::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(Patients::LastName).string_len(100).not_null())
                    .col(ColumnDef::new(Patients::DateOfBirth).date().null())
                    .col(ColumnDef::new(Patients::Gender).string_len(20).null())
                    .col(ColumnDef::new(Patients::Phone).string_len(50).null())
                    .col(ColumnDef::new(Patients::Email).string_len(255).null())
                    .col(ColumnDef::new(Patients::Address).text().null())
                    .col(
                        ColumnDef::new(Patients::EmergencyContactName)
                            .string_len(100)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Patients::EmergencyContactPhone)
                            .string_len(50)
                            .null(),
                    )
                    .col(ColumnDef::new(Patients::MedicalHistory).text().null())
                    .col(ColumnDef::new(Patients::Allergies).text().null())
                    .col(ColumnDef::new(Patients::ExistingCondition).text().null())
                    .col(ColumnDef::new(Patients::DentistNotes).text().null())
                    .col(
                        ColumnDef::new(Patients::AssignedDentist)
                            .string_len(100)
                            .null(),
                    )
                    .col(ColumnDef::new(Patients::CreatedBy).integer().null())
                    .col(
                        ColumnDef::new(Patients::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Patients::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_patients_created_by")
                            .from(Patients::Table, Patients::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_patients_last_first
                ON patients (last_name, first_name);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_patients_last_first")
            .await?;

        manager
            .drop_table(Table::drop().table(Patients::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Patients {
    Table,
    Id,
    FirstName,
    LastName,
    DateOfBirth,
    Gender,
    Phone,
    Email,
    Address,
    EmergencyContactName,
    EmergencyContactPhone,
    MedicalHistory,
    Allergies,
    ExistingCondition,
    DentistNotes,
    AssignedDentist,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
