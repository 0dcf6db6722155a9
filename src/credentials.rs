use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::{API_KEY_FILE, CONFIG_DIR_NAME, MASKED_API_KEY_PLACEHOLDER};
use crate::error::CredentialError;

/// Persisted API-key storage. Injected into the session so embedders and
/// tests can substitute their own backing.
pub trait ApiKeyStore: Send + Sync {
    /// The stored key, if any. Unreadable or blank storage reads as absent.
    fn get(&self) -> Option<String>;
    /// Persists a new key. Rejects values that trim to empty.
    fn set(&self, value: &str) -> Result<(), CredentialError>;
    /// Removes any stored key. Idempotent.
    fn clear(&self) -> Result<(), CredentialError>;
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredApiKey {
    api_key: String,
}

/// File-backed store keeping the key as a small JSON document.
pub struct FileApiKeyStore {
    path: PathBuf,
}

impl FileApiKeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join(CONFIG_DIR_NAME)
            .join(API_KEY_FILE)
    }
}

impl Default for FileApiKeyStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl ApiKeyStore for FileApiKeyStore {
    fn get(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let stored: StoredApiKey = serde_json::from_str(&contents)
            .map_err(|err| {
                warn!(
                    "ignoring malformed api key file '{}': {}",
                    self.path.display(),
                    err
                )
            })
            .ok()?;

        let trimmed = stored.api_key.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn set(&self, value: &str) -> Result<(), CredentialError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CredentialError::Empty);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload = serde_json::to_string_pretty(&StoredApiKey {
            api_key: trimmed.to_string(),
        })?;
        fs::write(&self.path, payload)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory store for tests and embedders without a writable disk.
#[derive(Default)]
pub struct MemoryApiKeyStore {
    value: Mutex<Option<String>>,
}

impl ApiKeyStore for MemoryApiKeyStore {
    fn get(&self) -> Option<String> {
        self.value.lock().expect("api key lock poisoned").clone()
    }

    fn set(&self, value: &str) -> Result<(), CredentialError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CredentialError::Empty);
        }

        *self.value.lock().expect("api key lock poisoned") = Some(trimmed.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialError> {
        *self.value.lock().expect("api key lock poisoned") = None;
        Ok(())
    }
}

/// Display-only transform; the unmasked key is never rendered.
pub fn mask_api_key(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() < 8 {
        return MASKED_API_KEY_PLACEHOLDER.to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}
