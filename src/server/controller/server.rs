use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        server::{PaginatedServersDto, ServerDto},
    },
    server::{error::AppError, service::server::ServerService, state::AppState},
};

/// Tag for grouping listing endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// Upper bound on `entries` per page.
pub const MAX_ENTRIES: u64 = 100;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Get a page of verified listings, most recently bumped first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated list of listings
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/servers",
    tag = SERVER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved listings", body = PaginatedServersDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_servers(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServerService::new(&state.db);

    let per_page = params.entries.clamp(1, MAX_ENTRIES);
    let servers = service.get_paginated(params.page, per_page).await?;

    Ok((StatusCode::OK, Json(servers.into_dto())))
}

/// Get a single listing by its Discord guild id.
///
/// # Returns
/// - `200 OK` - The listing
/// - `404 Not Found` - No listing with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/servers/{id}",
    tag = SERVER_TAG,
    params(
        ("id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved listing", body = ServerDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_server(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServerService::new(&state.db);

    let server = service
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Server {} not found", id)))?;

    Ok((StatusCode::OK, Json(server.into_dto())))
}
