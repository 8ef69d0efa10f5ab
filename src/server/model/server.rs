use chrono::{DateTime, Utc};

use crate::model::server::{PaginatedServersDto, ServerDto};

/// A registered listing.
///
/// `id` always equals the Discord guild id of the listed server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerRecord {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub invite_url: Option<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    /// Bump timestamp, drives the listing's sort position.
    pub updated_at: DateTime<Utc>,
}

impl ServerRecord {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::server::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            invite_url: entity.invite_url,
            verified: entity.verified,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            id: self.id,
            name: self.name,
            description: self.description,
            invite_url: self.invite_url,
            verified: self.verified,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// One page of listings plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedServers {
    pub servers: Vec<ServerRecord>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedServers {
    pub fn into_dto(self) -> PaginatedServersDto {
        PaginatedServersDto {
            servers: self.servers.into_iter().map(ServerRecord::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
