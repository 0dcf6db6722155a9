use anyhow::{Context, Result, bail};
use base64::Engine as _;
use log::{debug, warn};
use reqwest::Client;
use serde_json::{Value, json};

use crate::types::{ApiClient, EncodedImage};

use super::models::{GeminiResponse, InlineData};

/// Image first, text second; the caller expects both kinds back.
const RESPONSE_MODALITIES: [&str; 2] = ["IMAGE", "TEXT"];

pub fn build_generate_body(image: &EncodedImage, instruction: &str) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [
                {
                    "inlineData": {
                        "mimeType": image.mime_type,
                        "data": image.data_b64
                    }
                },
                { "text": instruction }
            ]
        }],
        "generationConfig": {
            "responseModalities": RESPONSE_MODALITIES
        }
    })
}

pub async fn send_generate_request(
    api_client: &ApiClient,
    image: &EncodedImage,
    instruction: &str,
) -> Result<GeminiResponse> {
    let endpoint = api_client.endpoint().trim_end_matches('/');
    let url = format!("{}/{}:generateContent", endpoint, api_client.model());

    let body = build_generate_body(image, instruction);

    debug!("sending generateContent request to {url}");

    let client = Client::new();
    let response = client
        .post(url)
        .header("x-goog-api-key", api_client.api_key())
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .context("HTTP request failed")?;

    let status = response.status();
    let response_text = response
        .text()
        .await
        .context("Reading response body failed")?;

    if !status.is_success() {
        warn!("generateContent returned status {status}");
        // The body carries the service's serialized error; surface it verbatim.
        bail!("{}", response_text);
    }

    let response: GeminiResponse = serde_json::from_str(&response_text).with_context(|| {
        format!(
            "Failed to decode generateContent response JSON. Raw response: {}",
            response_text
        )
    })?;

    Ok(response)
}

pub fn decode_inline_data(inline_data: &InlineData) -> Result<Vec<u8>> {
    base64::engine::general_purpose::STANDARD
        .decode(inline_data.data.trim())
        .context("Base64 decoding failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_body_carries_the_image_part_before_the_instruction() {
        let image = EncodedImage::new("image/jpeg", "QUJD");
        let body = build_generate_body(&image, "Redesign this room in the Modern style.");

        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[0]["inlineData"]["data"], "QUJD");
        assert_eq!(parts[1]["text"], "Redesign this room in the Modern style.");
        assert_eq!(body["contents"][0]["role"], "user");
    }

    #[test]
    fn generate_body_declares_image_and_text_modalities() {
        let image = EncodedImage::new("image/png", "QQ==");
        let body = build_generate_body(&image, "instruction");

        assert_eq!(
            body["generationConfig"]["responseModalities"],
            json!(["IMAGE", "TEXT"])
        );
    }

    #[test]
    fn response_with_mixed_parts_deserializes() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "a short note" },
                        { "inlineData": { "mimeType": "image/png", "data": "QQ==" } }
                    ],
                    "role": "model"
                },
                "finishReason": "STOP"
            }],
            "modelVersion": "test"
        }"#;

        let response: GeminiResponse = serde_json::from_str(raw).unwrap();
        let parts = &response.candidates[0].content.parts;
        assert_eq!(parts[0].text.as_deref(), Some("a short note"));
        let inline = parts[1].inline_data.as_ref().unwrap();
        assert_eq!(inline.mime_type, "image/png");
        assert_eq!(inline.data, "QQ==");
    }

    #[test]
    fn inline_data_decodes_to_the_original_bytes() {
        let inline = InlineData {
            mime_type: "image/png".to_string(),
            data: "aGVsbG8=".to_string(),
        };

        assert_eq!(decode_inline_data(&inline).unwrap(), b"hello");
    }

    #[test]
    fn error_envelope_parses_status_and_message() {
        use super::super::models::ErrorEnvelope;

        let raw = r#"{"error":{"code":429,"message":"quota","status":"RESOURCE_EXHAUSTED"}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(raw).unwrap();

        let body = envelope.error.unwrap();
        assert_eq!(body.code, Some(429));
        assert_eq!(body.message.as_deref(), Some("quota"));
        assert_eq!(body.status.as_deref(), Some("RESOURCE_EXHAUSTED"));
    }
}
