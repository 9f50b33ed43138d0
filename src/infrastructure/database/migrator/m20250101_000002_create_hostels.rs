//! Create hostels table

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hostels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hostels::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Hostels::OwnerId).string().not_null())
                    .col(ColumnDef::new(Hostels::Name).string().not_null())
                    .col(ColumnDef::new(Hostels::Description).string().not_null())
                    .col(ColumnDef::new(Hostels::Address).string().not_null())
                    .col(ColumnDef::new(Hostels::LocationLat).double().not_null())
                    .col(ColumnDef::new(Hostels::LocationLng).double().not_null())
                    .col(ColumnDef::new(Hostels::ContactNumber).string().not_null())
                    .col(ColumnDef::new(Hostels::Amenities).json().not_null())
                    .col(
                        ColumnDef::new(Hostels::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Hostels::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Hostels::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hostels_owner")
                            .from(Hostels::Table, Hostels::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hostels_owner")
                    .table(Hostels::Table)
                    .col(Hostels::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hostels_status")
                    .table(Hostels::Table)
                    .col(Hostels::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hostels::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Hostels {
    Table,
    Id,
    OwnerId,
    Name,
    Description,
    Address,
    LocationLat,
    LocationLng,
    ContactNumber,
    Amenities,
    Status,
    CreatedAt,
    UpdatedAt,
}
