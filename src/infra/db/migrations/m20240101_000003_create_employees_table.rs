//! Migration: Create employees table.
//!
//! Deleting a department that still has employees is refused by the
//! foreign key as well as by the service.

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_departments_table::Departments;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::FirstName).string_len(50).not_null())
                    .col(ColumnDef::new(Employees::LastName).string_len(50).not_null())
                    .col(ColumnDef::new(Employees::Address).string_len(200).not_null())
                    .col(ColumnDef::new(Employees::PhoneNumber).string_len(20).not_null())
                    .col(ColumnDef::new(Employees::Position).string_len(100).not_null())
                    .col(ColumnDef::new(Employees::HireDate).date().not_null())
                    .col(ColumnDef::new(Employees::DepartmentId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_department_id")
                            .from(Employees::Table, Employees::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employees_department_id")
                    .table(Employees::Table)
                    .col(Employees::DepartmentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Employees {
    Table,
    Id,
    FirstName,
    LastName,
    Address,
    PhoneNumber,
    Position,
    HireDate,
    DepartmentId,
}
