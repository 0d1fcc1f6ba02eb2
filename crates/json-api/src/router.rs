//! App Router

use salvo::Router;

use crate::{auth, carts, checkouts, orders, products, subscribers, uploads, users};

/// Every `/api` route.
pub fn app_router() -> Router {
    Router::with_path("api")
        .push(users_router())
        .push(products_router())
        .push(cart_router())
        .push(checkout_router())
        .push(orders_router())
        .push(
            authenticated()
                .hoop(auth::middleware::admin)
                .push(Router::with_path("upload").post(uploads::create::handler)),
        )
        .push(Router::with_path("subscribe").post(subscribers::create::handler))
        .push(admin_router())
}

fn authenticated() -> Router {
    Router::new().hoop(auth::middleware::handler)
}

fn users_router() -> Router {
    Router::with_path("users")
        .push(Router::with_path("register").post(users::register::handler))
        .push(Router::with_path("login").post(users::login::handler))
        .push(authenticated().push(Router::with_path("profile").get(users::profile::handler)))
}

fn products_router() -> Router {
    Router::with_path("products")
        .get(products::index::handler)
        .push(Router::with_path("best-sellers").get(products::best_sellers::handler))
        .push(Router::with_path("new-arrivals").get(products::new_arrivals::handler))
        .push(Router::with_path("similar/{product}").get(products::similar::handler))
        .push(Router::with_path("{product}").get(products::get::handler))
        .push(
            authenticated()
                .hoop(auth::middleware::admin)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
}

fn cart_router() -> Router {
    Router::new()
        .push(
            authenticated().push(Router::with_path("cart/merge").post(carts::merge::handler)),
        )
        .push(
            Router::with_path("cart")
                .hoop(auth::middleware::optional)
                .get(carts::get::handler)
                .post(carts::add::handler)
                .put(carts::update::handler)
                .delete(carts::remove::handler),
        )
}

fn checkout_router() -> Router {
    authenticated().push(
        Router::with_path("checkout")
            .post(checkouts::create::handler)
            .push(
                Router::with_path("{checkout}")
                    .get(checkouts::get::handler)
                    .push(Router::with_path("pay").put(checkouts::pay::handler))
                    .push(Router::with_path("finalize").post(checkouts::finalize::handler)),
            ),
    )
}

fn orders_router() -> Router {
    authenticated().push(
        Router::with_path("orders")
            .push(Router::with_path("my-orders").get(orders::mine::handler))
            .push(Router::with_path("{order}").get(orders::get::handler)),
    )
}

fn admin_router() -> Router {
    Router::with_path("admin")
        .hoop(auth::middleware::handler)
        .hoop(auth::middleware::admin)
        .push(
            Router::with_path("users")
                .get(users::index::handler)
                .post(users::create::handler)
                .push(
                    Router::with_path("{user}")
                        .put(users::update::handler)
                        .delete(users::delete::handler),
                ),
        )
        .push(Router::with_path("products").get(products::admin_index::handler))
        .push(
            Router::with_path("orders")
                .get(orders::admin_index::handler)
                .push(
                    Router::with_path("{order}")
                        .put(orders::admin_update::handler)
                        .delete(orders::admin_delete::handler),
                ),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        http::{StatusCode, header::AUTHORIZATION},
        prelude::*,
        test::TestClient,
    };
    use testresult::TestResult;
    use uuid::Uuid;

    use storefront_app::{
        auth::MockAuthService,
        domain::products::records::ProductUuid,
    };

    use crate::{
        catcher,
        test_helpers::{ADMIN, CUSTOMER, Mocks, make_product},
    };

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(mocks.into_state()))
                .push(app_router()),
        )
        .catcher(catcher::catcher())
    }

    fn expect_customer(auth: &mut MockAuthService) {
        auth.expect_authenticate_bearer()
            .once()
            .return_once(|_| Ok(CUSTOMER));
    }

    #[tokio::test]
    async fn test_literal_product_routes_win_over_uuid() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_new_arrivals()
            .once()
            .return_once(|| Ok(Vec::new()));

        mocks.products.expect_get_product().never();

        let res = TestClient::get("http://example.com/api/products/new-arrivals")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_public_product_read_needs_no_token() -> TestResult {
        let mut mocks = Mocks::default();
        let uuid = ProductUuid::new();

        mocks
            .products
            .expect_get_product()
            .once()
            .return_once(move |_| Ok(make_product(uuid)));

        let res = TestClient::get(format!("http://example.com/api/products/{uuid}"))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_product_writes_require_a_token() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.products.expect_delete_product().never();

        let res = TestClient::delete(format!("http://example.com/api/products/{}", Uuid::now_v7()))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_routes_reject_customers() -> TestResult {
        let mut mocks = Mocks::default();

        expect_customer(&mut mocks.auth);
        mocks.orders.expect_list_orders().never();

        let res = TestClient::get("http://example.com/api/admin/orders")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_routes_allow_admins() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .auth
            .expect_authenticate_bearer()
            .once()
            .return_once(|_| Ok(ADMIN));

        mocks
            .orders
            .expect_list_orders()
            .once()
            .return_once(|| Ok(Vec::new()));

        let res = TestClient::get("http://example.com/api/admin/orders")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_cart_merge_authenticates_once() -> TestResult {
        let mut mocks = Mocks::default();

        expect_customer(&mut mocks.auth);

        mocks
            .carts
            .expect_merge_guest_cart()
            .once()
            .return_once(|_, _| {
                Err(storefront_app::domain::carts::CartsServiceError::GuestCartNotFound)
            });

        let res = TestClient::post("http://example.com/api/cart/merge")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .json(&serde_json::json!({ "guest_id": "guest_abc" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_subscribe_is_public() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .subscribers
            .expect_subscribe()
            .once()
            .return_once(|_| {
                Err(storefront_app::domain::subscribers::SubscribersServiceError::MissingEmail)
            });

        let res = TestClient::post("http://example.com/api/subscribe")
            .json(&serde_json::json!({ "email": "" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
