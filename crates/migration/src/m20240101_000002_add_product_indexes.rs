//! Listing indexes for `product`.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // newest-first listing
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_product_created_at")
                    .table(Product::Table)
                    .col(Product::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_product_category")
                    .table(Product::Table)
                    .col(Product::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_product_category").table(Product::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_product_created_at").table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Product { Table, CreatedAt, Category }
