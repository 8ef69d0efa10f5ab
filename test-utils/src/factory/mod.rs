//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let server = factory::create_server(&db).await?;
//!
//!     // Customize
//!     let server = factory::server::ServerFactory::new(&db)
//!         .id("123456789")
//!         .verified(true)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `server` - Create listing rows
//! - `helpers` - Unique id generation

pub mod helpers;
pub mod server;

pub use server::create_server;
