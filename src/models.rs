use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of design styles a user can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignStyle {
    Modern,
    Minimalist,
    Industrial,
    Scandinavian,
    Bohemian,
    Classic,
}

impl DesignStyle {
    pub const ALL: [DesignStyle; 6] = [
        DesignStyle::Modern,
        DesignStyle::Minimalist,
        DesignStyle::Industrial,
        DesignStyle::Scandinavian,
        DesignStyle::Bohemian,
        DesignStyle::Classic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DesignStyle::Modern => "Modern",
            DesignStyle::Minimalist => "Minimalist",
            DesignStyle::Industrial => "Industrial",
            DesignStyle::Scandinavian => "Scandinavian",
            DesignStyle::Bohemian => "Bohemian",
            DesignStyle::Classic => "Classic",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.label().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for DesignStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An uploaded image held in memory together with its media type.
/// Read-only once constructed; encoding happens per request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageAsset {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Upload hand-off from the presentation layer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadPayload {
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub data_base64: String,
}

/// The image returned by the service for one request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub mime_type: String,
    pub base64: String,
}

/// Terminal result of one generation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success(GeneratedImage),
    Failure(String),
}
