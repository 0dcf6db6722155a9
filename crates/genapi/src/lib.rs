pub mod gemini;
pub mod types;

pub use gemini::send_generate_request;
pub use types::{ApiClient, EncodedImage};
