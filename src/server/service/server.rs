//! Listing store access for the interaction handlers and the listing feed.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::server::ServerRepository,
    error::AppError,
    model::server::{PaginatedServers, ServerRecord},
};

/// The slice of the listing database the interaction core needs.
///
/// Implementations must never create or delete listings and must only ever write
/// `updated_at`.
#[async_trait]
pub trait ServerRecordStore: Send + Sync {
    async fn find_server(&self, id: &str) -> Result<Option<ServerRecord>, DbErr>;

    /// Sets `updated_at` to `at`, returning `false` when no listing has this id.
    async fn touch_server(&self, id: &str, at: DateTime<Utc>) -> Result<bool, DbErr>;
}

/// `ServerRecordStore` backed by the SeaORM connection pool.
pub struct SeaOrmServerStore {
    db: DatabaseConnection,
}

impl SeaOrmServerStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServerRecordStore for SeaOrmServerStore {
    async fn find_server(&self, id: &str) -> Result<Option<ServerRecord>, DbErr> {
        ServerRepository::new(&self.db).find_by_id(id).await
    }

    async fn touch_server(&self, id: &str, at: DateTime<Utc>) -> Result<bool, DbErr> {
        ServerRepository::new(&self.db).touch_updated_at(id, at).await
    }
}

/// Read side of the directory used by the listing feed endpoints.
pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of verified listings ordered by bump recency.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index
    /// - `per_page` - Page size, must be non-zero
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedServers, AppError> {
        let repo = ServerRepository::new(self.db);

        let (servers, total) = repo.get_verified_paginated(page, per_page).await?;
        let total_pages = total.div_ceil(per_page);

        Ok(PaginatedServers {
            servers,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<ServerRecord>, AppError> {
        let repo = ServerRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }
}
