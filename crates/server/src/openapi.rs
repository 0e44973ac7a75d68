use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(Serialize, ToSchema)]
pub struct ReviewsDoc {
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

/// Create/update body. `images` also accepts a single string under the legacy profile.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInputDoc {
    pub name: String,
    pub price: f64,
    pub corrected_price: Option<f64>,
    pub retail_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub image: Option<String>,
    /// Exactly 5 URLs under the strict profile.
    pub images: Vec<String>,
    /// Exactly 3 URLs under the strict profile.
    pub description_pictures: Vec<String>,
    pub category: String,
    pub description: Option<String>,
    pub mini_description: Option<String>,
    pub reviews: Option<ReviewsDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDoc {
    pub id: Uuid,
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
    pub reviews: ReviewsDoc,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::list,
        crate::routes::products::create,
        crate::routes::products::get,
        crate::routes::products::update,
        crate::routes::products::delete,
        crate::routes::pages::product_page,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            ReviewsDoc,
            ProductInputDoc,
            ProductDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products"),
        (name = "pages")
    )
)]
pub struct ApiDoc;
