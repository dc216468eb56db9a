use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Products: name lookups (exact and substring)
        manager
            .create_index(
                Index::create()
                    .name("idx_products_name")
                    .table(Products::Table)
                    .col(Products::Name)
                    .to_owned(),
            )
            .await?;

        // Reviews: by reviewed product
        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_product")
                    .table(Reviews::Table)
                    .col(Reviews::IdProduct)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_reviews_product").table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_products_name").table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products { Table, Name }

#[derive(DeriveIden)]
enum Reviews { Table, IdProduct }
