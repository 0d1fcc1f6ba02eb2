//! Best Seller Handler

use std::sync::Arc;

use salvo::prelude::*;

use storefront_app::domain::products::ProductsServiceError;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Best Seller Handler
///
/// Returns the highest rated product in the catalog.
#[endpoint(
    tags("products"),
    summary = "Best Seller",
    responses(
        (status_code = StatusCode::OK, description = "Best seller found"),
        (status_code = StatusCode::NOT_FOUND, description = "Catalog is empty"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .best_seller()
        .await
        .map_err(|error| match error {
            ProductsServiceError::NotFound => {
                StatusError::not_found().brief("No best seller found")
            }
            error => into_status_error(error),
        })?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::products::records::ProductUuid;

    use crate::{
        catcher::ErrorResponse,
        test_helpers::{Mocks, anonymous_service, make_product},
    };

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        anonymous_service(mocks, Router::with_path("products/best-sellers").get(handler))
    }

    #[tokio::test]
    async fn test_best_seller_returns_product() -> TestResult {
        let mut mocks = Mocks::default();
        let uuid = ProductUuid::new();

        mocks
            .products
            .expect_best_seller()
            .once()
            .return_once(move || Ok(make_product(uuid)));

        let mut res = TestClient::get("http://example.com/products/best-sellers")
            .send(&make_service(mocks))
            .await;

        let response: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(response.uuid, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_catalog_returns_404() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_best_seller()
            .once()
            .return_once(|| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::get("http://example.com/products/best-sellers")
            .send(&make_service(mocks))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "No best seller found");

        Ok(())
    }
}
