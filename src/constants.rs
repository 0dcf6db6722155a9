pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

pub const CONFIG_DIR_NAME: &str = "config";
pub const API_KEY_FILE: &str = "api_key.json";

/// Shown in place of a key too short to mask meaningfully.
pub const MASKED_API_KEY_PLACEHOLDER: &str = "****";

// Fixed user-facing messages. Presentation renders these verbatim.
pub const MISSING_API_KEY_MESSAGE: &str = "An API key is required to generate a redesign.";
pub const MISSING_IMAGE_OR_STYLE_MESSAGE: &str =
    "Please upload an image and choose a design style.";
pub const GENERATION_IN_PROGRESS_MESSAGE: &str = "A redesign is already being generated.";
pub const NO_IMAGE_IN_RESPONSE_MESSAGE: &str = "No image was found in the service response.";
pub const QUOTA_EXCEEDED_MESSAGE: &str =
    "You have exceeded your usage quota for today. Check your billing plan or try again later.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred while generating the design.";
