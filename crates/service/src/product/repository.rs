use async_trait::async_trait;
use configs::ListOrder;
use models::product::{self, Draft};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Storage seam for the catalog. One call per operation; implementations
/// report absence through `Option`/`bool` and reserve errors for storage faults.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, draft: Draft) -> Result<product::Model, ServiceError>;
    async fn list(&self, order: ListOrder) -> Result<Vec<product::Model>, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<product::Model>, ServiceError>;
    async fn replace(&self, id: Uuid, draft: Draft) -> Result<Option<product::Model>, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn insert(&self, draft: Draft) -> Result<product::Model, ServiceError> {
        Ok(product::create(&self.db, draft).await?)
    }

    async fn list(&self, order: ListOrder) -> Result<Vec<product::Model>, ServiceError> {
        Ok(product::list(&self.db, order).await?)
    }

    async fn find(&self, id: Uuid) -> Result<Option<product::Model>, ServiceError> {
        Ok(product::find(&self.db, id).await?)
    }

    async fn replace(&self, id: Uuid, draft: Draft) -> Result<Option<product::Model>, ServiceError> {
        Ok(product::replace(&self.db, id, draft).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(product::delete(&self.db, id).await?)
    }
}
