use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::canvas::InstanceId;

/// Bytes of a picked image file, addressed to the instance whose form
/// started the read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    pub instance: InstanceId,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn to_data_url(&self) -> String {
        to_data_url(&self.file_name, &self.bytes)
    }
}

pub fn mime_type(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("ico") => "image/x-icon",
        Some("avif") => "image/avif",
        _ => "application/octet-stream",
    }
}

/// Encodes file bytes as a `data:` URI an `<img src>` can display.
pub fn to_data_url(file_name: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type(file_name), STANDARD.encode(bytes))
}
