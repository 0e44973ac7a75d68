//! Migrator for the product catalog schema.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_product;
mod m20240101_000002_add_product_indexes;
mod m20240101_000003_widen_product_text_columns;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_product::Migration),
            Box::new(m20240101_000002_add_product_indexes::Migration),
            Box::new(m20240101_000003_widen_product_text_columns::Migration),
        ]
    }
}
