//! Subscribe Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*, messages::MessageResponse, state::State,
    subscribers::errors::into_status_error,
};

/// Subscribe Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubscribeRequest {
    #[serde(default)]
    pub email: String,
}

/// Subscribe Handler
///
/// Adds an email address to the newsletter list.
#[endpoint(
    tags("newsletter"),
    summary = "Subscribe",
    responses(
        (status_code = StatusCode::CREATED, description = "Subscribed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or duplicate email"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SubscribeRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .subscribers
        .subscribe(json.into_inner().email)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(MessageResponse::new(
        "Successfully subscribed to the newsletter!",
    )))
}
