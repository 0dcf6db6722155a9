mod api;
pub mod models;

pub use api::{build_generate_body, decode_inline_data, send_generate_request};
