//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::ToParameters, prelude::*};
use serde::Deserialize;
use smallvec::SmallVec;

use storefront_app::domain::products::data::{ProductFilter, ProductSort};

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductsResponse},
    state::State,
};

/// Catalog filters. List filters take comma separated values.
#[derive(Debug, Default, Deserialize, ToParameters)]
#[salvo(parameters(default_parameter_in = Query))]
pub(crate) struct ProductQuery {
    /// Collection name, or `all`
    pub collection: Option<String>,

    /// Category name, or `all`
    pub category: Option<String>,

    /// Comma separated materials
    pub material: Option<String>,

    /// Comma separated brands
    pub brand: Option<String>,

    /// Comma separated sizes
    pub size: Option<String>,

    pub color: Option<String>,

    pub gender: Option<String>,

    /// Inclusive lower price bound in pence/cents
    pub min_price: Option<u64>,

    /// Inclusive upper price bound in pence/cents
    pub max_price: Option<u64>,

    /// Case-insensitive match against name or description
    pub search: Option<String>,

    /// `priceAsc`, `priceDesc` or `popularity`; newest first otherwise
    pub sort_by: Option<String>,

    /// Maximum number of products; zero means unlimited
    pub limit: Option<u32>,
}

impl From<ProductQuery> for ProductFilter {
    fn from(query: ProductQuery) -> Self {
        ProductFilter {
            collection: query.collection,
            category: query.category,
            materials: split_list(query.material.as_deref()),
            brands: split_list(query.brand.as_deref()),
            sizes: split_list(query.size.as_deref()),
            color: query.color,
            gender: query.gender,
            min_price: query.min_price,
            max_price: query.max_price,
            search: query.search,
            sort: query
                .sort_by
                .as_deref()
                .map_or(ProductSort::default(), |sort| {
                    sort.parse().unwrap_or_default()
                }),
            limit: query.limit,
        }
    }
}

fn split_list(value: Option<&str>) -> SmallVec<[String; 4]> {
    value
        .into_iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Product Index Handler
///
/// Returns the products matching the query filters.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    query: ProductQuery,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products(query.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}
