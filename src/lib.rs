mod constants;
mod credentials;
mod error;
mod generate;
mod img_utils;
mod models;
mod session;
mod state;

#[cfg(test)]
mod test_support;

pub use credentials::{mask_api_key, ApiKeyStore, FileApiKeyStore, MemoryApiKeyStore};

pub use error::{CredentialError, EncodingError};

pub use generate::{run_redesign, GenerateTransport, HttpTransport};

pub use img_utils::{data_url, decode_upload, encode_image, resolve_mime_type};

pub use models::{
    DesignStyle, GeneratedImage, GenerationOutcome, ImageAsset, ImageUploadPayload,
};

pub use session::Session;

pub use state::{reduce, Action, UiState};

pub use constants::{
    DEFAULT_GEMINI_ENDPOINT, DEFAULT_IMAGE_MIME, DEFAULT_IMAGE_MODEL,
    GENERATION_IN_PROGRESS_MESSAGE, MASKED_API_KEY_PLACEHOLDER, MISSING_API_KEY_MESSAGE,
    MISSING_IMAGE_OR_STYLE_MESSAGE, NO_IMAGE_IN_RESPONSE_MESSAGE, QUOTA_EXCEEDED_MESSAGE,
    UNKNOWN_ERROR_MESSAGE,
};
