use std::sync::Arc;

use configs::CatalogConfig;
use models::product;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::product::domain::ProductInput;
use crate::product::repository::ProductRepository;

/// Parse a path identifier. Runs before any store access.
pub fn parse_id(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ServiceError::invalid_id())
}

/// Application service for the catalog.
/// Owns input validation and the not-found policy; storage is behind `ProductRepository`.
#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
    catalog: CatalogConfig,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>, catalog: CatalogConfig) -> Self { Self { repo, catalog } }

    #[instrument(skip_all)]
    pub async fn create(&self, input: ProductInput) -> Result<product::Model, ServiceError> {
        let draft = input.into_draft(self.catalog.schema)?;
        let created = self.repo.insert(draft).await?;
        info!(product_id = %created.id, name = %created.name, "product created");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<product::Model>, ServiceError> {
        self.repo.list(self.catalog.list_order).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<product::Model, ServiceError> {
        let id = parse_id(id)?;
        self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found("Product"))
    }

    /// Full replace: fields omitted from `input` are cleared.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: &str, input: ProductInput) -> Result<product::Model, ServiceError> {
        let id = parse_id(id)?;
        let draft = input.into_draft(self.catalog.schema)?;
        let updated = self
            .repo
            .replace(id, draft)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product"))?;
        info!(product_id = %id, "product updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let id = parse_id(id)?;
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("Product"));
        }
        info!(product_id = %id, "product deleted");
        Ok(())
    }
}
