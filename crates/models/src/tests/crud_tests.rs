use anyhow::Result;
use configs::ListOrder;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::connect;
use crate::product::{self, Draft, DESCRIPTION_PICTURE_COUNT, IMAGE_COUNT};

/// Connect and migrate, or `None` when no database is available.
async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}

fn draft(name: &str) -> Draft {
    Draft {
        name: name.to_string(),
        price: 12.5,
        category: Some("kitchen".into()),
        images: (0..IMAGE_COUNT).map(|i| format!("https://cdn.example.com/i{i}.jpg")).collect(),
        description_pictures: (0..DESCRIPTION_PICTURE_COUNT).map(|i| format!("https://cdn.example.com/d{i}.jpg")).collect(),
        ..Draft::default()
    }
}

#[tokio::test]
async fn test_product_crud() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let name = format!("crud_product_{}", Uuid::new_v4());
    let created = product::create(&db, draft(&name)).await?;
    assert_eq!(created.name, name);
    assert_eq!(created.images.0.len(), IMAGE_COUNT);

    let found = product::find(&db, created.id).await?;
    assert_eq!(found.map(|m| m.id), Some(created.id));

    let replaced = product::replace(&db, created.id, Draft { price: 15.0, ..draft(&name) }).await?;
    let replaced = replaced.expect("row exists");
    assert_eq!(replaced.price, 15.0);
    assert_eq!(replaced.created_at, created.created_at);

    // same payload again: nothing to write
    let again = product::replace(&db, created.id, Draft { price: 15.0, ..draft(&name) }).await?;
    assert_eq!(again.as_ref(), Some(&replaced));

    assert!(product::delete(&db, created.id).await?);
    assert!(!product::delete(&db, created.id).await?);
    assert!(product::find(&db, created.id).await?.is_none());
    assert!(product::replace(&db, created.id, draft(&name)).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_product_list_newest_first() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let tag = Uuid::new_v4();
    let mut ids = vec![];
    for label in ["a", "b", "c"] {
        let m = product::create(&db, draft(&format!("order_{tag}_{label}"))).await?;
        ids.push(m.id);
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let listed: Vec<Uuid> = product::list(&db, ListOrder::NewestFirst)
        .await?
        .into_iter()
        .filter(|m| ids.contains(&m.id))
        .map(|m| m.id)
        .collect();
    assert_eq!(listed, vec![ids[2], ids[1], ids[0]]);

    let listed: Vec<Uuid> = product::list(&db, ListOrder::Insertion)
        .await?
        .into_iter()
        .filter(|m| ids.contains(&m.id))
        .map(|m| m.id)
        .collect();
    assert_eq!(listed, ids);

    for id in ids {
        product::delete(&db, id).await?;
    }
    Ok(())
}

#[tokio::test]
async fn test_long_name_and_category_are_stored() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let name = format!("{}_{}", "x".repeat(300), Uuid::new_v4());
    let category = "c".repeat(200);
    let created = product::create(&db, Draft { category: Some(category.clone()), ..draft(&name) }).await?;
    assert_eq!(created.name, name);

    let found = product::find(&db, created.id).await?.expect("row exists");
    assert_eq!(found.name, name);
    assert_eq!(found.category.as_deref(), Some(category.as_str()));

    product::delete(&db, created.id).await?;
    Ok(())
}
