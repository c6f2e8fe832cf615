//! Shared remote-key generation for storage adapters.
//!
//! Key format: `{folder}/{name}.{ext}`. Both adapters must use this format
//! so CDN path mappings work regardless of provider.

use picbed_core::ImageExtension;

/// Build the remote key for an upload.
pub fn remote_key(folder: &str, name: &str, extension: ImageExtension) -> String {
    format!("{}/{}.{}", folder.trim_matches('/'), name, extension)
}

/// Percent-encode a key for use in a request path, keeping `/` separators.
pub(crate) fn encode_key_path(key: &str) -> String {
    key.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// MIME type for a key, from its suffix. Providers store this as the
/// object's Content-Type, which browsers rely on when the URL is embedded.
pub(crate) fn content_type_for_key(key: &str) -> &'static str {
    match key.rsplit('.').next() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
