// src/shared/api/request_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{FormConfig, PayloadConfig};

/// Upper bound for a raw photo body on `POST /admin/photo`.
pub const MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;

pub fn custom_form_config() -> FormConfig {
    FormConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

pub fn photo_payload_config() -> PayloadConfig {
    PayloadConfig::new(MAX_PHOTO_BYTES)
}
