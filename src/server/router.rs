use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        server::{PaginatedServersDto, ServerDto},
    },
    server::{
        controller::{
            interaction::{self, handle_interaction},
            server::{self, get_server, list_servers},
        },
        startup::cors_layer,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        interaction::handle_interaction,
        server::list_servers,
        server::get_server,
    ),
    components(schemas(ErrorDto, ServerDto, PaginatedServersDto)),
    tags(
        (name = "interaction", description = "Discord Interactions webhook"),
        (name = "server", description = "Read-only listing feed"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/interactions", post(handle_interaction))
        .route("/api/servers", get(list_servers))
        .route("/api/servers/{id}", get(get_server))
        .route("/api/docs/openapi.json", get(openapi_json))
        .layer(cors_layer())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
