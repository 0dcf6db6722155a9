use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Result};

use genapi::gemini::models::{Candidate, Content, GeminiResponse, InlineData, Part};
use genapi::EncodedImage;

use crate::generate::GenerateTransport;

/// Canned transport that counts how often it is hit.
pub(crate) struct MockTransport {
    calls: Arc<AtomicUsize>,
    reply: Result<GeminiResponse, String>,
}

impl MockTransport {
    pub(crate) fn replying(reply: Result<GeminiResponse, String>) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            reply,
        }
    }

    pub(crate) fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GenerateTransport for MockTransport {
    async fn generate(
        &self,
        _image: &EncodedImage,
        _instruction: &str,
        _api_key: &str,
    ) -> Result<GeminiResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(response) => Ok(response.clone()),
            Err(message) => Err(anyhow!("{}", message)),
        }
    }
}

pub(crate) fn response_with_parts(parts: Vec<Part>) -> GeminiResponse {
    GeminiResponse {
        candidates: vec![Candidate {
            content: Content {
                parts,
                role: Some("model".to_string()),
            },
            finish_reason: None,
            index: None,
        }],
        usage_metadata: None,
        model_version: None,
        response_id: None,
    }
}

pub(crate) fn inline_part(mime_type: &str, data: &str) -> Part {
    Part {
        text: None,
        inline_data: Some(InlineData {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        }),
    }
}

pub(crate) fn text_part(text: &str) -> Part {
    Part {
        text: Some(text.to_string()),
        inline_data: None,
    }
}
