//! Product Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::products::records::{ProductDimensions, ProductImage, ProductRecord};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductImageBody {
    pub url: String,

    #[serde(default)]
    pub alt_text: Option<String>,
}

impl From<ProductImageBody> for ProductImage {
    fn from(image: ProductImageBody) -> Self {
        ProductImage {
            url: image.url,
            alt_text: image.alt_text,
        }
    }
}

impl From<ProductImage> for ProductImageBody {
    fn from(image: ProductImage) -> Self {
        Self {
            url: image.url,
            alt_text: image.alt_text,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub(crate) struct DimensionsBody {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl From<DimensionsBody> for ProductDimensions {
    fn from(dimensions: DimensionsBody) -> Self {
        ProductDimensions {
            length: dimensions.length,
            width: dimensions.width,
            height: dimensions.height,
        }
    }
}

impl From<ProductDimensions> for DimensionsBody {
    fn from(dimensions: ProductDimensions) -> Self {
        Self {
            length: dimensions.length,
            width: dimensions.width,
            height: dimensions.height,
        }
    }
}

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    pub name: String,

    pub description: String,

    /// The price of the product in pence/cents
    pub price: u64,

    /// Sale price in pence/cents, if discounted
    pub discount_price: Option<u64>,

    pub count_in_stock: u32,

    pub sku: String,

    pub category: String,

    pub brand: Option<String>,

    pub sizes: Vec<String>,

    pub colors: Vec<String>,

    pub collections: String,

    pub material: Option<String>,

    pub gender: Option<String>,

    pub images: Vec<ProductImageBody>,

    pub is_featured: bool,

    pub is_published: bool,

    pub rating: f64,

    pub num_reviews: u32,

    pub tags: Vec<String>,

    pub meta_title: Option<String>,

    pub meta_description: Option<String>,

    pub meta_keywords: Option<String>,

    pub dimensions: Option<DimensionsBody>,

    pub weight: Option<f64>,

    /// The admin who created the product
    pub user_uuid: Option<Uuid>,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            name: product.name,
            description: product.description,
            price: product.price,
            discount_price: product.discount_price,
            count_in_stock: product.count_in_stock,
            sku: product.sku,
            category: product.category,
            brand: product.brand,
            sizes: product.sizes,
            colors: product.colors,
            collections: product.collections,
            material: product.material,
            gender: product.gender,
            images: product.images.into_iter().map(Into::into).collect(),
            is_featured: product.is_featured,
            is_published: product.is_published,
            rating: product.rating,
            num_reviews: product.num_reviews,
            tags: product.tags,
            meta_title: product.meta_title,
            meta_description: product.meta_description,
            meta_keywords: product.meta_keywords,
            dimensions: product.dimensions.map(Into::into),
            weight: product.weight,
            user_uuid: product.user_uuid.map(Into::into),
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

impl From<Vec<ProductRecord>> for ProductsResponse {
    fn from(products: Vec<ProductRecord>) -> Self {
        Self {
            products: products.into_iter().map(Into::into).collect(),
        }
    }
}
