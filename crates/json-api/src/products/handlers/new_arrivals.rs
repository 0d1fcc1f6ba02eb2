//! New Arrivals Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductsResponse},
    state::State,
};

/// New Arrivals Handler
///
/// Returns the most recently added products, newest first.
#[endpoint(tags("products"), summary = "New Arrivals")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .new_arrivals()
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}
