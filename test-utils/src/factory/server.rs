//! Listing factory for creating test `servers` rows.
//!
//! Provides a builder with sensible defaults so tests only spell out the
//! fields they actually assert on.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test listings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::server::ServerFactory;
///
/// let server = ServerFactory::new(&db)
///     .id("987654321")
///     .name("Custom Server")
///     .updated_at(Utc::now() - chrono::Duration::hours(3))
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    description: Option<String>,
    invite_url: Option<String>,
    verified: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented numeric string
    /// - name: `"Server {id}"`
    /// - description / invite_url: `None`
    /// - verified: `true`
    /// - created_at / updated_at: `Utc::now()`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            id: id.to_string(),
            name: format!("Server {}", id),
            description: None,
            invite_url: None,
            verified: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the listing id (the Discord guild id).
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn invite_url(mut self, invite_url: Option<String>) -> Self {
        self.invite_url = invite_url;
        self
    }

    /// Sets whether an admin has verified the listing.
    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    /// Sets the bump timestamp.
    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Builds and inserts the listing into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server::Model)` - Created listing
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            invite_url: ActiveValue::Set(self.invite_url),
            verified: ActiveValue::Set(self.verified),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a listing with default values.
///
/// Shorthand for `ServerFactory::new(db).build().await`.
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db).build().await
}
