// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Largest document body accepted by the studio validation endpoint.
const MAX_DOCUMENT_BYTES: usize = 256 * 1024;

/// JSON extractor config for document payloads: malformed or oversized bodies
/// are answered with the API envelope instead of actix's plain-text error.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_DOCUMENT_BYTES)
        .error_handler(|err, _req| {
            let message = err.to_string();
            tracing::debug!("Rejected document payload: {}", message);
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("INVALID_DOCUMENT", &message),
            )
            .into()
        })
}
