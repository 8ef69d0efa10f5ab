mod model;
mod server;

use std::sync::Arc;

use crate::server::{
    config::Config,
    error::AppError,
    service::{discord::SerenityDiscordClient, registrar, server::SeaOrmServerStore},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let discord = Arc::new(SerenityDiscordClient::new(startup::setup_discord_http(
        &config,
    )));
    let verifier = Arc::new(startup::setup_signature_verifier(&config));
    let servers = Arc::new(SeaOrmServerStore::new(db.clone()));

    // Register slash commands off the request path
    let registrar_discord = discord.clone();
    let registrar_config = config.clone();
    tokio::spawn(async move {
        registrar::register_commands(registrar_discord.as_ref(), &registrar_config).await;
    });

    let state = AppState::new(db, verifier, servers, discord);
    let router = server::router::router().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address.as_str()).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, router).await?;

    Ok(())
}
