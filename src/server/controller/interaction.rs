use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, interaction::Interaction},
    server::{error::AppError, service::interaction::InteractionService, state::AppState},
};

/// Tag for grouping webhook endpoints in OpenAPI documentation
pub static INTERACTION_TAG: &str = "interaction";

/// Discord Interactions webhook.
///
/// The body is taken as raw bytes so the signature is checked against exactly what
/// Discord signed; it is parsed only after verification succeeds.
///
/// # Arguments
/// - `state` - Application state holding the verifier, listing store and Discord client
/// - `headers` - Request headers carrying `X-Signature-Ed25519` and `X-Signature-Timestamp`
/// - `body` - Raw request body
///
/// # Returns
/// - `200 OK` - Pong or channel message interaction response
/// - `400 Bad Request` - Signed body is not an interaction document
/// - `401 Unauthorized` - Missing or invalid signature
#[utoipa::path(
    post,
    path = "/api/interactions",
    tag = INTERACTION_TAG,
    params(
        ("X-Signature-Ed25519" = String, Header, description = "Hex encoded Ed25519 signature"),
        ("X-Signature-Timestamp" = String, Header, description = "Timestamp prefixed to the signed body")
    ),
    request_body(content = String, content_type = "application/json", description = "Discord interaction payload"),
    responses(
        (status = 200, description = "Interaction response (pong or channel message)"),
        (status = 400, description = "Signed body is not a valid interaction", body = ErrorDto),
        (status = 401, description = "Missing or invalid request signature")
    ),
)]
pub async fn handle_interaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    state.verifier.verify_headers(&headers, &body)?;

    let interaction: Interaction = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Rejected signed interaction with invalid payload: {}", e);
        AppError::BadRequest("invalid interaction payload".to_string())
    })?;

    let service = InteractionService::new(state.servers.as_ref(), state.discord.as_ref());
    let response = service.dispatch(interaction).await;

    Ok((StatusCode::OK, Json(response)))
}
