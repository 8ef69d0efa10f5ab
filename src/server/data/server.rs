use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::server::ServerRecord;

pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a listing by its Discord guild ID
    ///
    /// # Arguments
    /// - `id`: Discord guild ID as stored in the listing table
    ///
    /// # Returns
    /// - `Ok(Some(ServerRecord))`: Listing found
    /// - `Ok(None)`: Guild has not been registered on the website
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<ServerRecord>, DbErr> {
        let server = entity::prelude::Server::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(server.map(ServerRecord::from_entity))
    }

    /// Sets `updated_at` on a single listing, leaving every other column untouched
    ///
    /// Issued as one `UPDATE ... WHERE id = ?` so concurrent bumps resolve as
    /// last-write-wins without a read-modify-write cycle.
    ///
    /// # Returns
    /// - `Ok(true)`: The listing existed and was touched
    /// - `Ok(false)`: No listing with this id
    /// - `Err(DbErr)`: Database error during update
    pub async fn touch_updated_at(&self, id: &str, at: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Server::update_many()
            .col_expr(entity::server::Column::UpdatedAt, Expr::value(at))
            .filter(entity::server::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets a page of verified listings, most recently bumped first
    ///
    /// # Returns
    /// - `Ok((servers, total))`: The requested page and the total number of verified listings
    /// - `Err(DbErr)`: Database error during query
    pub async fn get_verified_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ServerRecord>, u64), DbErr> {
        let paginator = entity::prelude::Server::find()
            .filter(entity::server::Column::Verified.eq(true))
            .order_by_desc(entity::server::Column::UpdatedAt)
            .order_by_asc(entity::server::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let servers = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(ServerRecord::from_entity)
            .collect();

        Ok((servers, total))
    }
}
