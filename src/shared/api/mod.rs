mod request_config;
mod response;

pub use request_config::{custom_form_config, photo_payload_config};
pub use response::ApiResponse;
