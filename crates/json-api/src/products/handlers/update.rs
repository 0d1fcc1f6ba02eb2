//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::products::{data::ProductUpdate, records::ProductUuid};

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{DimensionsBody, ProductImageBody, ProductResponse},
    },
    state::State,
};

/// Update Product Request
///
/// Omitted fields keep their stored values.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<u64>,
    pub discount_price: Option<u64>,
    pub count_in_stock: Option<u32>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub collections: Option<String>,
    pub material: Option<String>,
    pub gender: Option<String>,
    pub images: Option<Vec<ProductImageBody>>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub dimensions: Option<DimensionsBody>,
    pub weight: Option<f64>,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            description: request.description,
            price: request.price,
            discount_price: request.discount_price,
            count_in_stock: request.count_in_stock,
            sku: request.sku,
            category: request.category,
            brand: request.brand,
            sizes: request.sizes,
            colors: request.colors,
            collections: request.collections,
            material: request.material,
            gender: request.gender,
            images: request
                .images
                .map(|images| images.into_iter().map(Into::into).collect()),
            is_featured: request.is_featured,
            is_published: request.is_published,
            tags: request.tags,
            meta_title: request.meta_title,
            meta_description: request.meta_description,
            meta_keywords: request.meta_keywords,
            dimensions: request.dimensions.map(Into::into),
            weight: request.weight,
        }
    }
}

/// Update Product Handler
///
/// Applies a partial update to a product. Admin only.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(product, json, depot),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = ProductUuid::from_uuid(product.into_inner());

    tracing::Span::current().record("product_uuid", tracing::field::display(product));

    let product = state
        .app
        .products
        .update_product(product, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
