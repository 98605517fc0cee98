use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use std::path::Path;

use crate::error::KitchenError;
use crate::providers::ImageData;

/// Where an ingredient photo comes from
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Image from a file path
    Path(String),
    /// Base64 data, either bare or as a `data:<mime>;base64,` URL
    Base64(String),
}

/// Loads the photo and returns it ready to attach to a generation request.
pub async fn load_image(source: &ImageSource) -> Result<ImageData, KitchenError> {
    match source {
        ImageSource::Path(path) => load_from_file(Path::new(path)).await,
        ImageSource::Base64(data) => from_base64(data),
    }
}

async fn load_from_file(path: &Path) -> Result<ImageData, KitchenError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| KitchenError::Image(format!("Failed to read {}: {}", path.display(), e)))?;
    if bytes.is_empty() {
        return Err(KitchenError::Image(format!("{} is empty", path.display())));
    }
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    Ok(ImageData {
        base64: STANDARD.encode(&bytes),
        mime_type: mime_type_for(path).to_string(),
    })
}

fn from_base64(data: &str) -> Result<ImageData, KitchenError> {
    let (mime_type, payload) = match data.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(";base64,")
            .ok_or_else(|| KitchenError::Image("Malformed data URL".to_string()))?,
        None => ("image/jpeg", data),
    };
    let payload = payload.trim();

    STANDARD
        .decode(payload)
        .map_err(|e| KitchenError::Image(format!("Invalid base64 image data: {}", e)))?;

    Ok(ImageData {
        base64: payload.to_string(),
        mime_type: mime_type.to_string(),
    })
}

/// Mime type guessed from the file extension; JPEG when unknown.
pub fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        _ => "image/jpeg",
    }
}
