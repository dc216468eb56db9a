//! Create `reviews` table.
//!
//! `id_product` and `id_user` carry no foreign keys: the product is checked
//! in application code and the user lives in another service.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(integer(Reviews::Id).auto_increment().primary_key())
                    .col(integer(Reviews::IdUser).not_null())
                    .col(integer(Reviews::IdProduct).not_null())
                    .col(integer(Reviews::Score).not_null())
                    .col(text(Reviews::Review).not_null())
                    .col(timestamp_with_time_zone(Reviews::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Reviews::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Reviews::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Reviews { Table, Id, IdUser, IdProduct, Score, Review, CreatedAt, UpdatedAt }
