use std::future::Future;

use anyhow::Result;
use log::warn;
use serde_json::Value;

use genapi::gemini::models::{ErrorEnvelope, GeminiResponse};
use genapi::gemini::send_generate_request;
use genapi::{ApiClient, EncodedImage};

use crate::constants::{
    DEFAULT_GEMINI_ENDPOINT, DEFAULT_IMAGE_MIME, DEFAULT_IMAGE_MODEL, MISSING_API_KEY_MESSAGE,
    MISSING_IMAGE_OR_STYLE_MESSAGE, NO_IMAGE_IN_RESPONSE_MESSAGE, QUOTA_EXCEEDED_MESSAGE,
    UNKNOWN_ERROR_MESSAGE,
};
use crate::models::{DesignStyle, GeneratedImage, GenerationOutcome};

/// One network attempt against the image service. Mocked in tests.
pub trait GenerateTransport: Send + Sync {
    fn generate(
        &self,
        image: &EncodedImage,
        instruction: &str,
        api_key: &str,
    ) -> impl Future<Output = Result<GeminiResponse>> + Send;
}

/// Default wire transport.
pub struct HttpTransport {
    endpoint: String,
    model: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_GEMINI_ENDPOINT, DEFAULT_IMAGE_MODEL)
    }
}

impl GenerateTransport for HttpTransport {
    async fn generate(
        &self,
        image: &EncodedImage,
        instruction: &str,
        api_key: &str,
    ) -> Result<GeminiResponse> {
        let client = ApiClient::new(api_key, self.endpoint.as_str(), self.model.as_str());
        send_generate_request(&client, image, instruction).await
    }
}

pub(crate) fn build_redesign_instruction(style: DesignStyle) -> String {
    format!(
        "Redesign this room in the {} style. Make it look photorealistic.",
        style.label()
    )
}

/// The request lifecycle for one generation: validate the inputs, issue a
/// single request, and map whatever comes back onto a terminal outcome.
/// No retries; every path ends in exactly one `Success` or `Failure`.
pub async fn run_redesign<T: GenerateTransport>(
    transport: &T,
    image: Option<&EncodedImage>,
    style: Option<DesignStyle>,
    api_key: Option<&str>,
) -> GenerationOutcome {
    let Some(api_key) = api_key.map(str::trim).filter(|value| !value.is_empty()) else {
        return GenerationOutcome::Failure(MISSING_API_KEY_MESSAGE.to_string());
    };

    let (Some(image), Some(style)) = (image, style) else {
        return GenerationOutcome::Failure(MISSING_IMAGE_OR_STYLE_MESSAGE.to_string());
    };

    let instruction = build_redesign_instruction(style);

    match transport.generate(image, &instruction, api_key).await {
        Ok(response) => match extract_generated_image(&response) {
            Some(generated) => GenerationOutcome::Success(generated),
            None => GenerationOutcome::Failure(NO_IMAGE_IN_RESPONSE_MESSAGE.to_string()),
        },
        Err(err) => {
            let message = classify_transport_error(&err);
            warn!("image generation failed: {message}");
            GenerationOutcome::Failure(message)
        }
    }
}

/// The first part carrying inline image data wins; later image parts and
/// any text commentary are ignored.
fn extract_generated_image(response: &GeminiResponse) -> Option<GeneratedImage> {
    for candidate in &response.candidates {
        for part in &candidate.content.parts {
            if let Some(inline_data) = &part.inline_data {
                let data = inline_data.data.trim();
                if data.is_empty() {
                    continue;
                }

                let mime_type = inline_data.mime_type.trim();
                let mime_type = if mime_type.is_empty() {
                    DEFAULT_IMAGE_MIME
                } else {
                    mime_type
                };

                return Some(GeneratedImage {
                    mime_type: mime_type.to_string(),
                    base64: data.to_string(),
                });
            }
        }
    }

    None
}

/// Maps a transport failure onto a user-facing message. The error text may
/// be the service's serialized error envelope; attempt to parse it, then
/// fall back to surfacing the raw text.
fn classify_transport_error(err: &anyhow::Error) -> String {
    let raw = err.root_cause().to_string();
    let raw = raw.trim();
    if raw.is_empty() {
        return UNKNOWN_ERROR_MESSAGE.to_string();
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(value) => {
            let detail = serde_json::from_value::<ErrorEnvelope>(value)
                .ok()
                .and_then(|envelope| envelope.error);

            match detail {
                Some(body) => {
                    let message = body.message.as_deref().map(str::trim).unwrap_or_default();
                    if message.is_empty() {
                        UNKNOWN_ERROR_MESSAGE.to_string()
                    } else if body.status.as_deref() == Some("RESOURCE_EXHAUSTED") {
                        QUOTA_EXCEEDED_MESSAGE.to_string()
                    } else {
                        format!("The image service reported an error: {message}")
                    }
                }
                None => UNKNOWN_ERROR_MESSAGE.to_string(),
            }
        }
        Err(_) => format!("Failed to generate the design: {raw}"),
    }
}
