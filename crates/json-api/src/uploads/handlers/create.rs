//! Upload Image Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::error;

use storefront_app::storage::{
    MAX_UPLOAD_BYTES, ObjectStoreError, content_type_for, image_extension,
};

use crate::{extensions::*, state::State, uploads::errors::into_status_error};

/// Upload Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UploadResponse {
    /// Public URL of the stored image
    pub image_url: String,
}

/// Upload Image Handler
///
/// Stores the multipart `image` field in object storage and returns its
/// public URL. Admin only.
#[endpoint(
    tags("uploads"),
    summary = "Upload Image",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Image stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or rejected file"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<UploadResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(file) = req.file("image").await else {
        return Err(StatusError::bad_request().brief("No file uploaded"));
    };

    let filename = file.name().unwrap_or_default();

    let extension = image_extension(filename).ok_or_else(|| {
        into_status_error(ObjectStoreError::UnsupportedExtension(filename.to_owned()))
    })?;

    if !usize::try_from(file.size()).is_ok_and(|size| size <= MAX_UPLOAD_BYTES) {
        return Err(into_status_error(ObjectStoreError::TooLarge {
            size: usize::try_from(file.size()).unwrap_or(usize::MAX),
            limit: MAX_UPLOAD_BYTES,
        }));
    }

    let bytes = tokio::fs::read(file.path()).await.map_err(|source| {
        error!("failed to read uploaded file: {source}");

        StatusError::internal_server_error()
    })?;

    let image_url = state
        .app
        .storage
        .put(bytes, content_type_for(&extension), &extension)
        .await
        .map_err(into_status_error)?;

    Ok(Json(UploadResponse { image_url }))
}
