//! Admin Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use storefront_app::domain::products::data::ProductFilter;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductsResponse},
    state::State,
};

/// Admin Product Index Handler
///
/// Returns every product, newest first. Admin only.
#[endpoint(
    tags("admin"),
    summary = "List All Products",
    security(("bearer_auth" = [])),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products(ProductFilter::default())
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::products::records::ProductUuid;

    use crate::test_helpers::{Mocks, admin_service, make_product};

    use super::*;

    #[tokio::test]
    async fn test_admin_index_lists_unfiltered() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_list_products()
            .once()
            .withf(|filter| *filter == ProductFilter::default())
            .return_once(|_| Ok(vec![make_product(ProductUuid::new())]));

        let service = admin_service(mocks, Router::with_path("admin/products").get(handler));

        let mut res = TestClient::get("http://example.com/admin/products")
            .send(&service)
            .await;

        let response: ProductsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(response.products.len(), 1);

        Ok(())
    }
}
