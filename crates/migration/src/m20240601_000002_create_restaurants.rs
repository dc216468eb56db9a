//! Create `restaurants` table.
//!
//! Delivery cost and delivery window are whole numbers (currency units / minutes).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurants::Table)
                    .if_not_exists()
                    .col(integer(Restaurants::Id).auto_increment().primary_key())
                    .col(string(Restaurants::Name).not_null())
                    .col(string(Restaurants::Address).not_null())
                    .col(integer(Restaurants::IdUser).not_null())
                    .col(string_len(Restaurants::PhoneNumber, 32).not_null())
                    .col(integer(Restaurants::SendCost).not_null())
                    .col(string(Restaurants::Description).not_null())
                    .col(string_len(Restaurants::TypeFood, 64).not_null())
                    .col(integer(Restaurants::MinTime).not_null())
                    .col(integer(Restaurants::MaxTime).not_null())
                    .col(timestamp_with_time_zone(Restaurants::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Restaurants::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Restaurants::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Restaurants {
    Table,
    Id,
    Name,
    Address,
    IdUser,
    PhoneNumber,
    SendCost,
    Description,
    TypeFood,
    MinTime,
    MaxTime,
    CreatedAt,
    UpdatedAt,
}
