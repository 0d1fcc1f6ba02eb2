//! Error response rendering.

use salvo::{
    catcher::Catcher,
    http::ResBody,
    oapi::ToSchema,
    prelude::*,
};
use serde::{Deserialize, Serialize};

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Human readable description of what went wrong
    pub message: String,
}

/// Renders error statuses as `{"message": ...}`. Handlers that already wrote
/// a body keep it.
#[handler]
pub(crate) async fn handler(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);

    if !status.is_client_error() && !status.is_server_error() {
        return;
    }

    let message = match &res.body {
        ResBody::Error(error) => error.brief.clone(),
        ResBody::None => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_owned(),
        _ => return,
    };

    drop(res.take_body());
    res.render(Json(ErrorResponse { message }));

    ctrl.skip_rest();
}

/// The catcher installed on every service.
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(handler)
}
