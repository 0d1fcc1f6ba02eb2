//! Products Data

use std::str::FromStr;

use smallvec::SmallVec;

use crate::domain::{
    line_items::MAX_AMOUNT,
    products::{
        errors::ProductsServiceError,
        records::{ProductDimensions, ProductImage, ProductRecord, ProductUuid},
    },
    users::records::UserUuid,
};

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
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
}

impl NewProduct {
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::AmountOutOfRange`] when a price cannot be stored.
    pub fn validate(&self) -> Result<(), ProductsServiceError> {
        check_amounts(Some(self.price), self.discount_price)
    }
}

/// Product Update Data
///
/// Every field is optional; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
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
    pub images: Option<Vec<ProductImage>>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub dimensions: Option<ProductDimensions>,
    pub weight: Option<f64>,
}

impl ProductUpdate {
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::AmountOutOfRange`] when a price cannot be stored.
    pub fn validate(&self) -> Result<(), ProductsServiceError> {
        check_amounts(self.price, self.discount_price)
    }

    /// Overwrite the fields of `product` that this update carries.
    pub fn apply(self, product: &mut ProductRecord) {
        fn set<T>(target: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *target = value;
            }
        }

        fn set_optional<T>(target: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *target = value;
            }
        }

        set(&mut product.name, self.name);
        set(&mut product.description, self.description);
        set(&mut product.price, self.price);
        set_optional(&mut product.discount_price, self.discount_price);
        set(&mut product.count_in_stock, self.count_in_stock);
        set(&mut product.sku, self.sku);
        set(&mut product.category, self.category);
        set_optional(&mut product.brand, self.brand);
        set(&mut product.sizes, self.sizes);
        set(&mut product.colors, self.colors);
        set(&mut product.collections, self.collections);
        set_optional(&mut product.material, self.material);
        set_optional(&mut product.gender, self.gender);
        set(&mut product.images, self.images);
        set(&mut product.is_featured, self.is_featured);
        set(&mut product.is_published, self.is_published);
        set(&mut product.tags, self.tags);
        set_optional(&mut product.meta_title, self.meta_title);
        set_optional(&mut product.meta_description, self.meta_description);
        set_optional(&mut product.meta_keywords, self.meta_keywords);
        set_optional(&mut product.dimensions, self.dimensions);
        set_optional(&mut product.weight, self.weight);
    }
}

fn check_amounts(
    price: Option<u64>,
    discount_price: Option<u64>,
) -> Result<(), ProductsServiceError> {
    if price.into_iter().chain(discount_price).any(|amount| amount > MAX_AMOUNT) {
        return Err(ProductsServiceError::AmountOutOfRange);
    }

    Ok(())
}

/// Catalog query filters. Empty lists and `None` values do not constrain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub collection: Option<String>,
    pub category: Option<String>,
    pub materials: SmallVec<[String; 4]>,
    pub brands: SmallVec<[String; 4]>,
    pub sizes: SmallVec<[String; 4]>,
    pub color: Option<String>,
    pub gender: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub search: Option<String>,
    pub sort: ProductSort,
    pub limit: Option<u32>,
}

impl ProductFilter {
    /// The collection to match, unless absent or the `all` wildcard.
    #[must_use]
    pub fn collection(&self) -> Option<&str> {
        specific(self.collection.as_deref())
    }

    /// The category to match, unless absent or the `all` wildcard.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        specific(self.category.as_deref())
    }

    /// Trimmed, non-empty search text.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|search| !search.is_empty())
    }

    /// Row limit; zero means unlimited.
    #[must_use]
    pub fn limit(&self) -> Option<u32> {
        self.limit.filter(|limit| *limit > 0)
    }
}

fn specific(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"))
}

/// Catalog sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSort {
    PriceAsc,
    PriceDesc,
    Popularity,
    #[default]
    Newest,
}

impl ProductSort {
    pub(crate) fn order_by(self) -> &'static str {
        match self {
            Self::PriceAsc => " ORDER BY price ASC, created_at DESC",
            Self::PriceDesc => " ORDER BY price DESC, created_at DESC",
            Self::Popularity => " ORDER BY rating DESC, num_reviews DESC",
            Self::Newest => " ORDER BY created_at DESC",
        }
    }
}

impl FromStr for ProductSort {
    type Err = std::convert::Infallible;

    /// Unknown keys fall back to newest first.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value {
            "priceAsc" => Self::PriceAsc,
            "priceDesc" => Self::PriceDesc,
            "popularity" => Self::Popularity,
            _ => Self::Newest,
        })
    }
}
