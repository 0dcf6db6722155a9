/// Connection settings for one generation call.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) api_key: String,
    pub(crate) endpoint: String,
    pub(crate) model: String,
}

impl ApiClient {
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// A transport-safe rendition of an image: base64 text plus its media type.
/// Derived from the raw bytes for every request, never reused across calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime_type: String,
    pub data_b64: String,
}

impl EncodedImage {
    pub fn new(mime_type: impl Into<String>, data_b64: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data_b64: data_b64.into(),
        }
    }
}
