//! Auth middleware.
//!
//! [`handler`] requires a valid bearer token, [`optional`] accepts requests
//! without one, and [`admin`] must run after [`handler`] to restrict a route
//! to administrators.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};

use crate::{auth::errors::into_status_error, extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        res.render(StatusError::unauthorized().brief("Not authorized, no token"));

        return;
    };

    if let Err(error) = authenticate(token, depot).await {
        res.render(error);

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

/// Attach the caller when a bearer token is present. A token that is present
/// but fails verification is still rejected.
#[salvo::handler]
pub(crate) async fn optional(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if req.headers().contains_key(AUTHORIZATION) {
        let Some(token) = extract_bearer_token(req) else {
            res.render(StatusError::unauthorized().brief("Not authorized, token failed"));

            return;
        };

        if let Err(error) = authenticate(token, depot).await {
            res.render(error);

            return;
        }
    }

    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
pub(crate) async fn admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    match depot.current_user() {
        Some(user) if user.is_admin() => {
            ctrl.call_next(req, depot, res).await;
        }
        Some(_) => res.render(StatusError::forbidden().brief("Not authorized as an admin")),
        None => res.render(StatusError::unauthorized().brief("Not authorized, no token")),
    }
}

async fn authenticate(token: &str, depot: &mut Depot) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .auth
        .authenticate_bearer(token)
        .await
        .map_err(into_status_error)?;

    depot.insert_current_user(user);

    Ok(())
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use storefront_app::{
        auth::{AuthServiceError, MockAuthService, TokenError},
        domain::users::records::Role,
    };

    use crate::test_helpers::{ADMIN, CUSTOMER, Mocks};

    use super::*;

    #[salvo::handler]
    async fn echo_user(depot: &mut Depot, res: &mut Response) {
        let user = depot
            .current_user()
            .map_or_else(|| "anonymous".to_string(), |user| user.uuid.to_string());

        res.render(user);
    }

    fn make_service(auth: MockAuthService, guard: Router) -> Service {
        let state = Mocks {
            auth,
            ..Mocks::default()
        }
        .into_state();

        Service::new(
            Router::new()
                .hoop(inject(state))
                .push(guard.push(Router::new().get(echo_user))),
        )
    }

    fn required() -> Router {
        Router::new().hoop(handler)
    }

    fn admin_only() -> Router {
        Router::new().hoop(handler).hoop(admin)
    }

    fn expect_token(auth: &mut MockAuthService, role: Role) {
        let user = if role == Role::Admin { ADMIN } else { CUSTOMER };

        auth.expect_authenticate_bearer()
            .once()
            .withf(|token| token == "abc123")
            .return_once(move |_| Ok(user));
    }

    #[tokio::test]
    async fn test_missing_authorization_header_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        let res = TestClient::get("http://example.com")
            .send(&make_service(auth, required()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_non_bearer_authorization_header_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Basic abc123", true)
            .send(&make_service(auth, required()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_token_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .withf(|token| token == "abc123")
            .return_once(|_| Err(AuthServiceError::InvalidToken(TokenError::Expired)));

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&make_service(auth, required()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_deleted_user_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .return_once(|_| Err(AuthServiceError::UserNotFound));

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&make_service(auth, required()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_valid_token_injects_current_user() -> TestResult {
        let mut auth = MockAuthService::new();

        expect_token(&mut auth, Role::Customer);

        let mut res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "bearer abc123", true)
            .send(&make_service(auth, required()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, CUSTOMER.uuid.to_string());

        Ok(())
    }

    #[tokio::test]
    async fn test_optional_without_header_continues_anonymously() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        let mut res = TestClient::get("http://example.com")
            .send(&make_service(auth, Router::new().hoop(optional)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "anonymous");

        Ok(())
    }

    #[tokio::test]
    async fn test_optional_with_bad_token_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .return_once(|_| Err(AuthServiceError::UserNotFound));

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&make_service(auth, Router::new().hoop(optional)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_optional_with_valid_token_injects_current_user() -> TestResult {
        let mut auth = MockAuthService::new();

        expect_token(&mut auth, Role::Customer);

        let mut res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&make_service(auth, Router::new().hoop(optional)))
            .await;

        assert_eq!(res.take_string().await?, CUSTOMER.uuid.to_string());

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_rejects_customers_with_403() -> TestResult {
        let mut auth = MockAuthService::new();

        expect_token(&mut auth, Role::Customer);

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&make_service(auth, admin_only()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_allows_admins() -> TestResult {
        let mut auth = MockAuthService::new();

        expect_token(&mut auth, Role::Admin);

        let mut res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&make_service(auth, admin_only()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, ADMIN.uuid.to_string());

        Ok(())
    }
}
