use configs::SchemaProfile;
use models::errors::ModelError;
use models::product::{validate_required, Draft, Reviews};
use serde::{Deserialize, Serialize};

/// A picture field as clients send it: one URL or an ordered list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PictureList {
    One(String),
    Many(Vec<String>),
}

impl PictureList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(u) => vec![u],
            Self::Many(v) => v,
        }
    }
}

/// Create/update payload. Every field is optional on the wire so that a
/// missing field surfaces as a validation error instead of a decode failure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInput {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub corrected_price: Option<f64>,
    pub retail_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub image: Option<String>,
    pub images: Option<PictureList>,
    pub description_pictures: Option<PictureList>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub mini_description: Option<String>,
    pub reviews: Option<Reviews>,
}

impl ProductInput {
    /// `price`, else `salePrice`, else `retailPrice`. Zero is treated as absent.
    pub fn effective_price(&self) -> Option<f64> {
        let set = |p: Option<f64>| p.filter(|v| *v != 0.0);
        set(self.price).or(set(self.sale_price)).or(set(self.retail_price))
    }

    /// Validate against `profile` and produce the replaceable content.
    pub fn into_draft(self, profile: SchemaProfile) -> Result<Draft, ModelError> {
        let price = self.effective_price();
        validate_required(self.name.as_deref(), price, self.category.as_deref())?;
        let draft = Draft {
            name: self.name.unwrap_or_default(),
            price: price.unwrap_or_default(),
            corrected_price: self.corrected_price,
            retail_price: self.retail_price,
            sale_price: self.sale_price,
            image: self.image,
            images: self.images.map(PictureList::into_vec).unwrap_or_default(),
            description_pictures: self.description_pictures.map(PictureList::into_vec).unwrap_or_default(),
            category: self.category,
            description: self.description,
            mini_description: self.mini_description,
            reviews: self.reviews.unwrap_or_default(),
        };
        draft.validate(profile)?;
        Ok(draft)
    }
}
