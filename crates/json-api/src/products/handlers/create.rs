//! Create Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::{
    products::{data::NewProduct, records::ProductUuid},
    users::records::UserUuid,
};

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{DimensionsBody, ProductImageBody, ProductResponse},
    },
    state::State,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    pub name: String,

    pub description: String,

    /// The price of the product in pence/cents
    pub price: u64,

    #[serde(default)]
    pub discount_price: Option<u64>,

    pub count_in_stock: u32,

    pub sku: String,

    pub category: String,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub sizes: Vec<String>,

    #[serde(default)]
    pub colors: Vec<String>,

    pub collections: String,

    #[serde(default)]
    pub material: Option<String>,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub images: Vec<ProductImageBody>,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub is_published: bool,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub meta_title: Option<String>,

    #[serde(default)]
    pub meta_description: Option<String>,

    #[serde(default)]
    pub meta_keywords: Option<String>,

    #[serde(default)]
    pub dimensions: Option<DimensionsBody>,

    #[serde(default)]
    pub weight: Option<f64>,
}

impl CreateProductRequest {
    fn into_new_product(self, uuid: ProductUuid, user: UserUuid) -> NewProduct {
        NewProduct {
            uuid,
            name: self.name,
            description: self.description,
            price: self.price,
            discount_price: self.discount_price,
            count_in_stock: self.count_in_stock,
            sku: self.sku,
            category: self.category,
            brand: self.brand,
            sizes: self.sizes,
            colors: self.colors,
            collections: self.collections,
            material: self.material,
            gender: self.gender,
            images: self.images.into_iter().map(Into::into).collect(),
            is_featured: self.is_featured,
            is_published: self.is_published,
            rating: 0.0,
            num_reviews: 0,
            tags: self.tags,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
            meta_keywords: self.meta_keywords,
            dimensions: self.dimensions.map(Into::into),
            weight: self.weight,
            user_uuid: Some(user),
        }
    }
}

/// Create Product Handler
///
/// Adds a product to the catalog, attributed to the calling admin.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid payload or duplicate SKU"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let admin = depot.current_user_or_401()?;

    let product = state
        .app
        .products
        .create_product(json.into_inner().into_new_product(ProductUuid::new(), admin.uuid))
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/products/{}", product.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}
