use async_trait::async_trait;
use chrono::Utc;
use configs::ListOrder;
use models::product::{self, Draft};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::product::repository::ProductRepository;

/// Process-local store keeping records in insertion order.
/// Used by tests and local demos; nothing survives a restart.
#[derive(Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<Vec<product::Model>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self { Self::default() }

    pub async fn len(&self) -> usize { self.inner.read().await.len() }

    pub async fn is_empty(&self) -> bool { self.inner.read().await.is_empty() }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, draft: Draft) -> Result<product::Model, ServiceError> {
        let rec = draft.into_model(Uuid::new_v4(), Utc::now().into());
        let mut rows = self.inner.write().await;
        rows.push(rec.clone());
        Ok(rec)
    }

    async fn list(&self, order: ListOrder) -> Result<Vec<product::Model>, ServiceError> {
        let rows = self.inner.read().await;
        let out = match order {
            ListOrder::NewestFirst => rows.iter().rev().cloned().collect(),
            ListOrder::Insertion => rows.clone(),
        };
        Ok(out)
    }

    async fn find(&self, id: Uuid) -> Result<Option<product::Model>, ServiceError> {
        let rows = self.inner.read().await;
        Ok(rows.iter().find(|m| m.id == id).cloned())
    }

    async fn replace(&self, id: Uuid, draft: Draft) -> Result<Option<product::Model>, ServiceError> {
        let mut rows = self.inner.write().await;
        let Some(existing) = rows.iter_mut().find(|m| m.id == id) else { return Ok(None) };
        if !draft.matches(existing) {
            draft.overwrite(existing, Utc::now().into());
        }
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut rows = self.inner.write().await;
        let before = rows.len();
        rows.retain(|m| m.id != id);
        Ok(rows.len() < before)
    }
}
