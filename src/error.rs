use thiserror::Error;

/// The uploaded image data could not be turned into a usable asset.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("The selected image could not be read.")]
    Unreadable,
}

/// Failures of the persisted API-key store.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("API key cannot be empty.")]
    Empty,
    #[error("Unable to update the stored API key: {0}")]
    Storage(#[from] std::io::Error),
    #[error("Unable to encode the stored API key: {0}")]
    Encode(#[from] serde_json::Error),
}
