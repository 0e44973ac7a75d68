//! `name` and `category` are unbounded text.
//! Schemas created with the earlier varchar columns are widened in place.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Product::Table)
                    .modify_column(ColumnDef::new(Product::Name).text().not_null())
                    .modify_column(ColumnDef::new(Product::Category).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Product::Table)
                    .modify_column(ColumnDef::new(Product::Name).string_len(256).not_null())
                    .modify_column(ColumnDef::new(Product::Category).string_len(128).null())
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Name,
    Category,
}
