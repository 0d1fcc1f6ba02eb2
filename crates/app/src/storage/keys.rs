//! Upload keys and accepted file types.

use sha2::{Digest, Sha256};

/// Extensions accepted for product images.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "avif"];

/// Largest accepted upload, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Lowercased extension of `filename` if it is an accepted image type.
#[must_use]
pub fn image_extension(filename: &str) -> Option<String> {
    let (stem, extension) = filename.rsplit_once('.')?;

    if stem.is_empty() {
        return None;
    }

    let extension = extension.to_ascii_lowercase();

    ALLOWED_EXTENSIONS
        .contains(&extension.as_str())
        .then_some(extension)
}

/// MIME type for an accepted image extension.
#[must_use]
pub fn content_type_for(extension: &str) -> &'static str {
    match extension {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

/// Content-addressed object key, `uploads/<sha256>.<ext>`.
#[must_use]
pub fn object_key(bytes: &[u8], extension: &str) -> String {
    format!("uploads/{:x}.{extension}", Sha256::digest(bytes))
}
