//! `product` entity: the single catalog document.
//!
//! The table carries the union of every field the catalog has accepted over
//! time; `configs::SchemaProfile` decides which of them a deployment requires.

use chrono::Utc;
use configs::{ListOrder, SchemaProfile};
use sea_orm::{entity::prelude::*, DatabaseConnection, DbErr, FromJsonQueryResult, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

pub const IMAGE_COUNT: usize = 5;
pub const DESCRIPTION_PICTURE_COUNT: usize = 3;

pub const REQUIRED_FIELDS_MSG: &str = "All fields are required";
pub const IMAGE_COUNT_MSG: &str = "Please provide exactly 5 product images";
pub const DESCRIPTION_PICTURE_COUNT_MSG: &str = "Please provide exactly 3 description pictures";

/// Ordered list of picture URLs, stored as a JSONB array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct UrlList(pub Vec<String>);

impl UrlList {
    pub fn as_slice(&self) -> &[String] { &self.0 }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl From<Vec<String>> for UrlList {
    fn from(v: Vec<String>) -> Self { Self(v) }
}

/// Up to five customer/review pairs. Not a list: slot `n` pairs `customerN` with `reviewN`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(default)]
pub struct Reviews {
    pub customer1: Option<String>,
    pub review1: Option<String>,
    pub customer2: Option<String>,
    pub review2: Option<String>,
    pub customer3: Option<String>,
    pub review3: Option<String>,
    pub customer4: Option<String>,
    pub review4: Option<String>,
    pub customer5: Option<String>,
    pub review5: Option<String>,
}

impl Reviews {
    /// Filled slots in order; a slot counts when either side has text.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let slots = [
            (&self.customer1, &self.review1),
            (&self.customer2, &self.review2),
            (&self.customer3, &self.review3),
            (&self.customer4, &self.review4),
            (&self.customer5, &self.review5),
        ];
        slots
            .into_iter()
            .map(|(c, r)| (c.as_deref().unwrap_or(""), r.as_deref().unwrap_or("")))
            .filter(|(c, r)| !c.trim().is_empty() || !r.trim().is_empty())
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    pub price: f64,
    pub corrected_price: Option<f64>,
    pub retail_price: Option<f64>,
    pub sale_price: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub images: UrlList,
    #[sea_orm(column_type = "JsonBinary")]
    pub description_pictures: UrlList,
    #[sea_orm(column_type = "Text", nullable)]
    pub category: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub mini_description: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub reviews: Reviews,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Replaceable content of a product: everything except identity and timestamps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub price: f64,
    pub corrected_price: Option<f64>,
    pub retail_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub description_pictures: Vec<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub mini_description: Option<String>,
    pub reviews: Reviews,
}

fn is_blank(s: &str) -> bool { s.trim().is_empty() }

/// Presence check shared by create and update.
/// A zero price counts as missing.
pub fn validate_required(name: Option<&str>, price: Option<f64>, category: Option<&str>) -> Result<(), ModelError> {
    let name_ok = name.is_some_and(|n| !is_blank(n));
    let price_ok = price.is_some_and(|p| p.is_finite() && p != 0.0);
    let category_ok = category.is_some_and(|c| !is_blank(c));
    if !(name_ok && price_ok && category_ok) {
        return Err(ModelError::Validation(REQUIRED_FIELDS_MSG.into()));
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), ModelError> {
    if price < 0.0 {
        return Err(ModelError::Validation("price must not be negative".into()));
    }
    Ok(())
}

fn has_exactly(list: &[String], n: usize) -> bool {
    list.len() == n && list.iter().all(|u| !is_blank(u))
}

pub fn validate_pictures(images: &[String], description_pictures: &[String], profile: SchemaProfile) -> Result<(), ModelError> {
    match profile {
        SchemaProfile::Strict => {
            if !has_exactly(images, IMAGE_COUNT) {
                return Err(ModelError::Validation(IMAGE_COUNT_MSG.into()));
            }
            if !has_exactly(description_pictures, DESCRIPTION_PICTURE_COUNT) {
                return Err(ModelError::Validation(DESCRIPTION_PICTURE_COUNT_MSG.into()));
            }
        }
        SchemaProfile::Legacy => {
            if images.iter().chain(description_pictures).any(|u| is_blank(u)) {
                return Err(ModelError::Validation("picture URLs must not be empty".into()));
            }
        }
    }
    Ok(())
}

impl Draft {
    pub fn validate(&self, profile: SchemaProfile) -> Result<(), ModelError> {
        validate_required(Some(&self.name), Some(self.price), self.category.as_deref())?;
        validate_price(self.price)?;
        validate_pictures(&self.images, &self.description_pictures, profile)
    }

    /// True when writing this draft over `m` would change nothing.
    pub fn matches(&self, m: &Model) -> bool {
        self.name == m.name
            && self.price == m.price
            && self.corrected_price == m.corrected_price
            && self.retail_price == m.retail_price
            && self.sale_price == m.sale_price
            && self.image == m.image
            && self.images == m.images.0
            && self.description_pictures == m.description_pictures.0
            && self.category == m.category
            && self.description == m.description
            && self.mini_description == m.mini_description
            && self.reviews == m.reviews
    }

    pub fn into_model(self, id: Uuid, now: DateTimeWithTimeZone) -> Model {
        Model {
            id,
            name: self.name,
            price: self.price,
            corrected_price: self.corrected_price,
            retail_price: self.retail_price,
            sale_price: self.sale_price,
            image: self.image,
            images: UrlList(self.images),
            description_pictures: UrlList(self.description_pictures),
            category: self.category,
            description: self.description,
            mini_description: self.mini_description,
            reviews: self.reviews,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every replaceable field of an existing record.
    pub fn overwrite(self, m: &mut Model, now: DateTimeWithTimeZone) {
        let id = m.id;
        let created_at = m.created_at;
        *m = self.into_model(id, created_at);
        m.updated_at = now;
    }

    fn apply(self, am: &mut ActiveModel) {
        am.name = Set(self.name);
        am.price = Set(self.price);
        am.corrected_price = Set(self.corrected_price);
        am.retail_price = Set(self.retail_price);
        am.sale_price = Set(self.sale_price);
        am.image = Set(self.image);
        am.images = Set(UrlList(self.images));
        am.description_pictures = Set(UrlList(self.description_pictures));
        am.category = Set(self.category);
        am.description = Set(self.description);
        am.mini_description = Set(self.mini_description);
        am.reviews = Set(self.reviews);
    }
}

pub async fn create(db: &DatabaseConnection, draft: Draft) -> Result<Model, ModelError> {
    let now: DateTimeWithTimeZone = Utc::now().into();
    let mut am = ActiveModel {
        id: Set(Uuid::new_v4()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    draft.apply(&mut am);
    Ok(am.insert(db).await?)
}

pub async fn list(db: &DatabaseConnection, order: ListOrder) -> Result<Vec<Model>, ModelError> {
    let finder = match order {
        ListOrder::NewestFirst => Entity::find().order_by_desc(Column::CreatedAt),
        ListOrder::Insertion => Entity::find().order_by_asc(Column::CreatedAt),
    };
    Ok(finder.all(db).await?)
}

pub async fn find(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Full replace. `Ok(None)` when no row has `id`; unchanged content skips the write.
pub async fn replace(db: &DatabaseConnection, id: Uuid, draft: Draft) -> Result<Option<Model>, ModelError> {
    let Some(existing) = Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    if draft.matches(&existing) {
        return Ok(Some(existing));
    }
    let mut am: ActiveModel = existing.into();
    draft.apply(&mut am);
    am.updated_at = Set(Utc::now().into());
    match am.update(db).await {
        Ok(m) => Ok(Some(m)),
        // deleted between the read and the write
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
