//! Inline image handles.
//!
//! Uploaded images are stored inside the product entry as `data:` URLs, the same
//! shape a browser `FileReader::readAsDataURL` produces. No resizing or
//! re-encoding happens; large files make large entries.

use crate::error::{Result, StorefrontError};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fs;
use std::path::Path;

const FALLBACK_MIME: &str = "application/octet-stream";

pub fn encode_data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Reads `path` and returns its contents as a `data:` URL.
pub fn read_data_url(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(StorefrontError::Io)?;
    Ok(encode_data_url(&bytes, mime_for_path(path)))
}

/// Best-effort MIME type from the file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("ico") => "image/x-icon",
        Some("avif") => "image/avif",
        _ => FALLBACK_MIME,
    }
}

pub fn is_data_url(handle: &str) -> bool {
    handle.starts_with("data:")
}
