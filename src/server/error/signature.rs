use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Reasons an inbound webhook request failed authentication.
///
/// Every variant is rendered identically as `401 Unauthorized` so callers learn
/// nothing about which check failed.
#[derive(Error, Debug)]
pub enum SignatureError {
    /// One of the signature headers is absent or not valid ASCII.
    #[error("Missing required header: {0}")]
    MissingHeader(&'static str),

    /// The signature header is not a hex encoded 64 byte Ed25519 signature.
    #[error("Signature header is not a valid Ed25519 signature")]
    MalformedSignature,

    /// The configured public key cannot be used for verification.
    #[error("Configured public key is invalid: {0}")]
    InvalidPublicKey(String),

    /// The signature does not match the timestamp and body.
    #[error("Signature verification failed")]
    VerificationFailed,
}

impl IntoResponse for SignatureError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected interaction request: {}", self);

        (StatusCode::UNAUTHORIZED, "invalid request signature").into_response()
    }
}
