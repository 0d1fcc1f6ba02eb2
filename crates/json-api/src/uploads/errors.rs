//! Upload Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::storage::ObjectStoreError;

pub(crate) fn into_status_error(error: ObjectStoreError) -> StatusError {
    match error {
        ObjectStoreError::UnsupportedExtension(extension) => StatusError::bad_request()
            .brief(format!("Unsupported file type: {extension}")),
        ObjectStoreError::TooLarge { limit, .. } => StatusError::bad_request()
            .brief(format!("File is too large, the limit is {limit} bytes")),
        ObjectStoreError::Empty => StatusError::bad_request().brief("File is empty"),
        ObjectStoreError::Http(source) => {
            error!("object store request failed: {source}");

            StatusError::internal_server_error().brief("Upload failed")
        }
        ObjectStoreError::UnexpectedResponse(status) => {
            error!("object store rejected upload: {status}");

            StatusError::internal_server_error().brief("Upload failed")
        }
    }
}
