use std::sync::Mutex;

use crate::constants::{
    GENERATION_IN_PROGRESS_MESSAGE, MISSING_API_KEY_MESSAGE, MISSING_IMAGE_OR_STYLE_MESSAGE,
};
use crate::credentials::{mask_api_key, ApiKeyStore, FileApiKeyStore};
use crate::generate::{run_redesign, GenerateTransport, HttpTransport};
use crate::img_utils;
use crate::models::{DesignStyle, GenerationOutcome, ImageUploadPayload};
use crate::state::{reduce, Action, UiState};

/// The inbound surface presentation collaborators drive. Holds the only
/// mutable state in the core; one logical operation touches it at a time,
/// and the lock is never held across a suspension point.
pub struct Session<T: GenerateTransport = HttpTransport> {
    ui: Mutex<UiState>,
    store: Box<dyn ApiKeyStore>,
    transport: T,
}

impl Session<HttpTransport> {
    pub fn new() -> Self {
        Self::with_parts(Box::new(FileApiKeyStore::default()), HttpTransport::default())
    }
}

impl Default for Session<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: GenerateTransport> Session<T> {
    pub fn with_parts(store: Box<dyn ApiKeyStore>, transport: T) -> Self {
        let ui = UiState {
            credential_present: store.get().is_some(),
            ..UiState::default()
        };

        Self {
            ui: Mutex::new(ui),
            store,
            transport,
        }
    }

    /// Read-only snapshot for rendering.
    pub fn ui_state(&self) -> UiState {
        self.ui.lock().expect("ui state lock poisoned").clone()
    }

    pub fn select_image(&self, payload: ImageUploadPayload) -> UiState {
        let action = match img_utils::decode_upload(&payload) {
            Ok(asset) => Action::ImageSelected(asset),
            Err(err) => Action::ImageRejected(err.to_string()),
        };

        self.apply(action)
    }

    pub fn select_style(&self, style: DesignStyle) -> UiState {
        self.apply(Action::StyleSelected(style))
    }

    pub fn set_api_key(&self, value: &str) -> UiState {
        let action = match self.store.set(value) {
            Ok(()) => Action::ApiKeyStored,
            Err(err) => Action::ApiKeyRejected(err.to_string()),
        };

        self.apply(action)
    }

    pub fn clear_api_key(&self) -> UiState {
        let action = match self.store.clear() {
            Ok(()) => Action::ApiKeyCleared,
            Err(err) => Action::ApiKeyRejected(err.to_string()),
        };

        self.apply(action)
    }

    /// Masked rendition of the stored key for display.
    pub fn masked_api_key(&self) -> Option<String> {
        self.store.get().map(|value| mask_api_key(&value))
    }

    /// Runs one generation request to completion. Refused while a previous
    /// one is still in flight; the triggering control is expected to be
    /// disabled meanwhile.
    pub async fn generate_redesign(&self) -> UiState {
        let (asset, style, api_key) = {
            let mut ui = self.ui.lock().expect("ui state lock poisoned");

            if ui.in_flight {
                return Self::apply_locked(
                    &mut ui,
                    Action::GenerationRejected(GENERATION_IN_PROGRESS_MESSAGE.to_string()),
                );
            }

            let Some(api_key) = self.store.get() else {
                return Self::apply_locked(
                    &mut ui,
                    Action::GenerationRejected(MISSING_API_KEY_MESSAGE.to_string()),
                );
            };

            let (asset, style) = match (ui.original_image.clone(), ui.selected_style) {
                (Some(asset), Some(style)) => (asset, style),
                _ => {
                    return Self::apply_locked(
                        &mut ui,
                        Action::GenerationRejected(MISSING_IMAGE_OR_STYLE_MESSAGE.to_string()),
                    );
                }
            };

            Self::apply_locked(&mut ui, Action::GenerationStarted);
            (asset, style, api_key)
        };

        let outcome = match img_utils::encode_image(&asset).await {
            Ok(encoded) => {
                run_redesign(&self.transport, Some(&encoded), Some(style), Some(&api_key)).await
            }
            Err(err) => GenerationOutcome::Failure(err.to_string()),
        };

        self.apply(Action::GenerationFinished(outcome))
    }

    fn apply(&self, action: Action) -> UiState {
        let mut ui = self.ui.lock().expect("ui state lock poisoned");
        Self::apply_locked(&mut ui, action)
    }

    fn apply_locked(ui: &mut UiState, action: Action) -> UiState {
        *ui = reduce(std::mem::take(ui), action);
        ui.clone()
    }
}
