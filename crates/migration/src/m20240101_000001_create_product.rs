//! Create `product` table.
//! Picture lists and reviews are stored as JSONB documents.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(uuid(Product::Id).primary_key())
                    .col(text(Product::Name).not_null())
                    .col(double(Product::Price).not_null())
                    .col(double_null(Product::CorrectedPrice))
                    .col(double_null(Product::RetailPrice))
                    .col(double_null(Product::SalePrice))
                    .col(text_null(Product::Image))
                    .col(json_binary(Product::Images).not_null())
                    .col(json_binary(Product::DescriptionPictures).not_null())
                    .col(text_null(Product::Category))
                    .col(text_null(Product::Description))
                    .col(text_null(Product::MiniDescription))
                    .col(json_binary(Product::Reviews).not_null())
                    .col(timestamp_with_time_zone(Product::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Product::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Id,
    Name,
    Price,
    CorrectedPrice,
    RetailPrice,
    SalePrice,
    Image,
    Images,
    DescriptionPictures,
    Category,
    Description,
    MiniDescription,
    Reviews,
    CreatedAt,
    UpdatedAt,
}
