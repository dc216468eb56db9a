//! Create `products` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(integer(Products::Id).auto_increment().primary_key())
                    .col(string(Products::Name).not_null())
                    .col(string(Products::Description).not_null())
                    .col(integer(Products::Price).not_null())
                    .col(integer(Products::IdUser).not_null())
                    .col(timestamp_with_time_zone(Products::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Products::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Products::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Products { Table, Id, Name, Description, Price, IdUser, CreatedAt, UpdatedAt }
