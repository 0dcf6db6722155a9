use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use base64::Engine;

use genapi::EncodedImage;

use crate::constants::DEFAULT_IMAGE_MIME;
use crate::error::EncodingError;
use crate::models::{ImageAsset, ImageUploadPayload};

/// The caller-provided media type wins, then a guess from the file name,
/// then the default.
pub fn resolve_mime_type(candidate: Option<&str>, file_name: Option<&str>) -> String {
    if let Some(value) = candidate {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    file_name
        .and_then(|name| mime_guess::from_path(name).first_raw())
        .unwrap_or(DEFAULT_IMAGE_MIME)
        .to_string()
}

/// Turns an upload hand-off into an in-memory asset.
pub fn decode_upload(payload: &ImageUploadPayload) -> Result<ImageAsset, EncodingError> {
    let data = payload.data_base64.trim();
    if data.is_empty() {
        return Err(EncodingError::Unreadable);
    }

    let bytes = BASE64_ENGINE
        .decode(data)
        .map_err(|_| EncodingError::Unreadable)?;

    let mime_type = resolve_mime_type(payload.mime_type.as_deref(), payload.file_name.as_deref());

    Ok(ImageAsset { mime_type, bytes })
}

/// Encodes an asset for transport. Recomputed for every request since the
/// source image may change between generations.
pub async fn encode_image(asset: &ImageAsset) -> Result<EncodedImage, EncodingError> {
    if asset.bytes.is_empty() {
        return Err(EncodingError::Unreadable);
    }

    Ok(EncodedImage::new(
        asset.mime_type.clone(),
        BASE64_ENGINE.encode(&asset.bytes),
    ))
}

/// Renders an image as a browser-displayable data URL.
pub fn data_url(mime_type: &str, data_b64: &str) -> String {
    format!("data:{mime_type};base64,{data_b64}")
}

pub fn preview_url(asset: &ImageAsset) -> String {
    data_url(&asset.mime_type, &BASE64_ENGINE.encode(&asset.bytes))
}
