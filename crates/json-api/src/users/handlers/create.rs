//! Create User Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::users::{
    data::NewUser,
    records::{Role, UserUuid},
};

use crate::{
    extensions::*, state::State, users::errors::into_status_error, users::models::UserResponse,
};

/// Create User Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,

    /// Defaults to `customer`
    #[serde(default)]
    pub role: Option<String>,
}

/// Create User Handler
///
/// Creates a user with any role. Admin only.
#[endpoint(
    tags("admin"),
    summary = "Create User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "User created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid payload or duplicate email"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateUserRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let role = request
        .role
        .as_deref()
        .map(str::parse::<Role>)
        .transpose()
        .or_400("Invalid role")?
        .unwrap_or_default();

    let user = state
        .app
        .users
        .create_user(NewUser {
            uuid: UserUuid::new(),
            name: request.name,
            email: request.email,
            password: request.password,
            role,
        })
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/admin/users/{}", user.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::users::{UsersServiceError, records::UserRecord};

    use crate::test_helpers::{Mocks, admin_service, make_user};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        admin_service(mocks, Router::with_path("admin/users").post(handler))
    }

    fn created(user: &NewUser) -> UserRecord {
        UserRecord {
            name: user.name.clone(),
            email: user.email.clone(),
            ..make_user(user.uuid, user.role)
        }
    }

    #[tokio::test]
    async fn test_create_defaults_to_customer() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .users
            .expect_create_user()
            .once()
            .withf(|user| user.role == Role::Customer && user.email == "sam@example.com")
            .return_once(|user| Ok(created(&user)));

        let mut res = TestClient::post("http://example.com/admin/users")
            .json(&json!({ "name": "Sam", "email": "sam@example.com", "password": "hunter22" }))
            .send(&make_service(mocks))
            .await;

        let response: UserResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(response.role, "customer");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_admin() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .users
            .expect_create_user()
            .once()
            .withf(|user| user.role == Role::Admin)
            .return_once(|user| Ok(created(&user)));

        let res = TestClient::post("http://example.com/admin/users")
            .json(&json!({
                "name": "Sam",
                "email": "sam@example.com",
                "password": "hunter22",
                "role": "admin",
            }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_unknown_role_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.users.expect_create_user().never();

        let res = TestClient::post("http://example.com/admin/users")
            .json(&json!({
                "name": "Sam",
                "email": "sam@example.com",
                "password": "hunter22",
                "role": "root",
            }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .users
            .expect_create_user()
            .once()
            .return_once(|_| Err(UsersServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/admin/users")
            .json(&json!({ "name": "Sam", "email": "sam@example.com", "password": "hunter22" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
