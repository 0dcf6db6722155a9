use serde::Serialize;

use crate::img_utils;
use crate::models::{DesignStyle, GenerationOutcome, ImageAsset};

/// Everything the presentation layer can observe about the current session.
///
/// Invariants: `in_flight` is true exactly between request issuance and
/// outcome arrival; `error_message` and `result_preview_url` are never both
/// set.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    #[serde(skip)]
    pub original_image: Option<ImageAsset>,
    pub original_preview_url: Option<String>,
    pub result_preview_url: Option<String>,
    pub selected_style: Option<DesignStyle>,
    pub credential_present: bool,
    pub in_flight: bool,
    pub error_message: Option<String>,
}

/// One state transition, applied through [`reduce`].
#[derive(Clone, Debug)]
pub enum Action {
    ImageSelected(ImageAsset),
    ImageRejected(String),
    StyleSelected(DesignStyle),
    ApiKeyStored,
    ApiKeyRejected(String),
    ApiKeyCleared,
    GenerationRejected(String),
    GenerationStarted,
    GenerationFinished(GenerationOutcome),
}

/// Pure transition function: the previous state and an action produce the
/// next state.
pub fn reduce(state: UiState, action: Action) -> UiState {
    let mut next = state;

    match action {
        Action::ImageSelected(asset) => {
            next.original_preview_url = Some(img_utils::preview_url(&asset));
            next.original_image = Some(asset);
            next.result_preview_url = None;
            next.error_message = None;
        }
        Action::ImageRejected(message)
        | Action::ApiKeyRejected(message)
        | Action::GenerationRejected(message) => {
            next.error_message = Some(message);
            next.result_preview_url = None;
        }
        Action::StyleSelected(style) => {
            next.selected_style = Some(style);
        }
        Action::ApiKeyStored => {
            next.credential_present = true;
            next.error_message = None;
        }
        Action::ApiKeyCleared => {
            next.credential_present = false;
        }
        Action::GenerationStarted => {
            next.in_flight = true;
            next.error_message = None;
            next.result_preview_url = None;
        }
        Action::GenerationFinished(outcome) => {
            next.in_flight = false;
            match outcome {
                GenerationOutcome::Success(image) => {
                    next.result_preview_url =
                        Some(img_utils::data_url(&image.mime_type, &image.base64));
                    next.error_message = None;
                }
                GenerationOutcome::Failure(message) => {
                    next.error_message = Some(message);
                    next.result_preview_url = None;
                }
            }
        }
    }

    next
}
