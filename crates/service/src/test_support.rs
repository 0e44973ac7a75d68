use async_trait::async_trait;
use configs::ListOrder;
use migration::MigratorTrait;
use models::product::{self, Draft};
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::product::{PictureList, ProductInput, ProductRepository};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Migrated connection, or `None` when DB tests are disabled or unconfigured.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }
    MIGRATED
        .get_or_try_init(|| async {
            let db = models::db::connect().await?;
            migration::Migrator::up(&db, None).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;
    Ok(Some(models::db::connect().await?))
}

/// Payload satisfying the strict profile.
pub fn strict_input(name: &str) -> ProductInput {
    ProductInput {
        name: Some(name.to_string()),
        price: Some(19.99),
        category: Some("kitchen".into()),
        images: Some(PictureList::Many((0..5).map(|i| format!("https://cdn.example.com/p/{i}.jpg")).collect())),
        description_pictures: Some(PictureList::Many((0..3).map(|i| format!("https://cdn.example.com/d/{i}.jpg")).collect())),
        ..ProductInput::default()
    }
}

/// Early-revision payload: one `image`, no picture arrays.
pub fn legacy_input(name: &str) -> ProductInput {
    ProductInput {
        name: Some(name.to_string()),
        price: Some(10.0),
        image: Some("u".into()),
        category: Some("kitchen".into()),
        ..ProductInput::default()
    }
}

/// Fails every call with a storage error.
pub struct UnreachableRepository;

fn down() -> ServiceError { ServiceError::Storage("store unreachable".into()) }

#[async_trait]
impl ProductRepository for UnreachableRepository {
    async fn insert(&self, _draft: Draft) -> Result<product::Model, ServiceError> { Err(down()) }
    async fn list(&self, _order: ListOrder) -> Result<Vec<product::Model>, ServiceError> { Err(down()) }
    async fn find(&self, _id: Uuid) -> Result<Option<product::Model>, ServiceError> { Err(down()) }
    async fn replace(&self, _id: Uuid, _draft: Draft) -> Result<Option<product::Model>, ServiceError> { Err(down()) }
    async fn delete(&self, _id: Uuid) -> Result<bool, ServiceError> { Err(down()) }
}
