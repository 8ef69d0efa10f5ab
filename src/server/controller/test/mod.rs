use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::server::{
    router::router,
    service::signature::{SignatureVerifier, SIGNATURE_HEADER, TIMESTAMP_HEADER},
    state::AppState,
    test::{
        fake::{FakeDiscordApi, FakeServerStore},
        signing::{public_key_hex, sign, signing_key},
    },
};


const TIMESTAMP: &str = "1700000000";

async fn test_db() -> DatabaseConnection {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();

    test.db.unwrap()
}

fn verifier() -> SignatureVerifier {
    SignatureVerifier::from_hex(&public_key_hex(&signing_key())).unwrap()
}

/// Router wired to the given fakes; the fakes are returned for assertions.
async fn app_with(
    servers: FakeServerStore,
    discord: FakeDiscordApi,
    verifier: SignatureVerifier,
) -> (Router, Arc<FakeServerStore>, Arc<FakeDiscordApi>) {
    let servers = Arc::new(servers);
    let discord = Arc::new(discord);

    let state = AppState::new(
        test_db().await,
        Arc::new(verifier),
        servers.clone(),
        discord.clone(),
    );

    (router().with_state(state), servers, discord)
}

fn signed_request(body: &str) -> Request<Body> {
    let signature = sign(&signing_key(), TIMESTAMP, body.as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/interactions")
        .header("content-type", "application/json")
        .header(SIGNATURE_HEADER, signature)
        .header(TIMESTAMP_HEADER, TIMESTAMP)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}
