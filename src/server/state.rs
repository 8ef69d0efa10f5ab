use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::{
    discord::DiscordApi, server::ServerRecordStore, signature::SignatureVerifier,
};

/// Application state shared across all HTTP request handlers.
///
/// Cloned for each incoming request via Axum's state extraction. Every field is
/// either a connection pool or reference counted, so clones share the same
/// underlying resources.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool used by the listing feed.
    pub db: DatabaseConnection,

    /// Verifier for the `X-Signature-Ed25519` header of webhook requests.
    pub verifier: Arc<SignatureVerifier>,

    /// Listing store used by `/bump`.
    pub servers: Arc<dyn ServerRecordStore>,

    /// Discord REST client used by `/invite`.
    pub discord: Arc<dyn DiscordApi>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `verifier` - Webhook signature verifier
    /// - `servers` - Listing store
    /// - `discord` - Discord REST client
    pub fn new(
        db: DatabaseConnection,
        verifier: Arc<SignatureVerifier>,
        servers: Arc<dyn ServerRecordStore>,
        discord: Arc<dyn DiscordApi>,
    ) -> Self {
        Self {
            db,
            verifier,
            servers,
            discord,
        }
    }
}
