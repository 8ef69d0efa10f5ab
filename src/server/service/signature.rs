//! Ed25519 verification of inbound webhook requests.
//!
//! Discord signs `timestamp || body` with the application's private key and sends the
//! hex encoded signature and the timestamp as headers. Verification must run over the
//! raw request bytes exactly as received.

use axum::http::HeaderMap;
use ed25519_dalek::{Signature, Verifier, VerifyingKey, PUBLIC_KEY_LENGTH};

use crate::server::error::signature::SignatureError;

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Verifies request signatures against the application's public key.
pub struct SignatureVerifier {
    /// `None` when the configured key could not be parsed, every request is rejected.
    public_key: Option<VerifyingKey>,
}

impl SignatureVerifier {
    /// Parses a hex encoded 32 byte Ed25519 public key.
    ///
    /// # Returns
    /// - `Ok(SignatureVerifier)` - Key parsed and usable
    /// - `Err(SignatureError::InvalidPublicKey)` - Key is not hex, has the wrong length,
    ///   or is not a valid curve point
    pub fn from_hex(public_key: &str) -> Result<Self, SignatureError> {
        let bytes = hex::decode(public_key.trim())
            .map_err(|e| SignatureError::InvalidPublicKey(e.to_string()))?;

        let bytes: [u8; PUBLIC_KEY_LENGTH] = bytes.as_slice().try_into().map_err(|_| {
            SignatureError::InvalidPublicKey(format!(
                "expected {} bytes, got {}",
                PUBLIC_KEY_LENGTH,
                bytes.len()
            ))
        })?;

        let public_key = VerifyingKey::from_bytes(&bytes)
            .map_err(|e| SignatureError::InvalidPublicKey(e.to_string()))?;

        Ok(Self {
            public_key: Some(public_key),
        })
    }

    /// A verifier that fails every request, used when the configured key is unusable.
    pub fn reject_all() -> Self {
        Self { public_key: None }
    }

    /// Verifies `signature` over `timestamp` followed by the raw `body`.
    pub fn verify(&self, signature: &str, timestamp: &str, body: &[u8]) -> Result<(), SignatureError> {
        let Some(public_key) = self.public_key.as_ref() else {
            return Err(SignatureError::InvalidPublicKey(
                "no usable public key configured".to_string(),
            ));
        };

        let signature = hex::decode(signature).map_err(|_| SignatureError::MalformedSignature)?;
        let signature =
            Signature::from_slice(&signature).map_err(|_| SignatureError::MalformedSignature)?;

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        public_key
            .verify(&message, &signature)
            .map_err(|_| SignatureError::VerificationFailed)
    }

    /// Pulls the signature headers out of a request and verifies them against `body`.
    pub fn verify_headers(&self, headers: &HeaderMap, body: &[u8]) -> Result<(), SignatureError> {
        let signature = header_str(headers, SIGNATURE_HEADER)?;
        let timestamp = header_str(headers, TIMESTAMP_HEADER)?;

        self.verify(signature, timestamp, body)
    }
}

fn header_str<'h>(headers: &'h HeaderMap, name: &'static str) -> Result<&'h str, SignatureError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .ok_or(SignatureError::MissingHeader(name))
}
