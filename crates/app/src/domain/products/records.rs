//! Product Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{domain::users::records::UserUuid, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    pub price: u64,
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
    pub images: Vec<ProductImage>,
    pub is_featured: bool,
    pub is_published: bool,
    pub rating: f64,
    pub num_reviews: u32,
    pub tags: Vec<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub dimensions: Option<ProductDimensions>,
    pub weight: Option<f64>,
    pub user_uuid: Option<UserUuid>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProductRecord {
    /// URL of the first image, or an empty string for imageless products.
    #[must_use]
    pub fn primary_image_url(&self) -> &str {
        self.images.first().map_or("", |image| image.url.as_str())
    }
}

/// Product Image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
}

/// Product Dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}
