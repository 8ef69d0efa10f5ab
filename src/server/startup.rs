use axum::http::Method;
use serenity::{all::ApplicationId, http::Http};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, service::signature::SignatureVerifier};

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and falls back to `info` when it is unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations so the `servers` table exists before the
/// first request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the Serenity REST client for the configured bot token.
///
/// Returns `None` without a token; Discord calls are then skipped at call time.
pub fn setup_discord_http(config: &Config) -> Option<Arc<Http>> {
    let Some(token) = config.discord_bot_token.as_deref() else {
        tracing::warn!("DISCORD_BOT_TOKEN not set, Discord REST calls are disabled");
        return None;
    };

    let http = Http::new(token);
    if let Some(application_id) = config.discord_application_id {
        http.set_application_id(ApplicationId::new(application_id.get()));
    }

    Some(Arc::new(http))
}

/// Parses the configured public key.
///
/// A malformed key does not stop the server: it starts with a verifier that rejects
/// every request, so misconfiguration surfaces as 401 responses rather than 5xx.
pub fn setup_signature_verifier(config: &Config) -> SignatureVerifier {
    match SignatureVerifier::from_hex(&config.discord_public_key) {
        Ok(verifier) => verifier,
        Err(e) => {
            tracing::error!(
                "DISCORD_PUBLIC_KEY is not a valid Ed25519 public key ({}), all interactions will be rejected",
                e
            );
            SignatureVerifier::reject_all()
        }
    }
}

/// CORS policy for the API routes.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
