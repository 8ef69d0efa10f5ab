//! Server-side webhook backend and business logic.
//!
//! This module contains the complete backend of the listing directory's Discord
//! integration: the Interactions webhook, the slash command handlers, startup command
//! registration and a read-only listing feed. The backend uses Axum as the web
//! framework, SeaORM for database operations, and Serenity for Discord REST calls.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Signature verification, interaction dispatch,
//!   command handlers and registration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, verifier, store, Discord client)
//! - **Startup** (`startup`) - Tracing, database, Discord client and CORS setup
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! A webhook request flows through these layers:
//!
//! 1. **Router** receives the POST and hands the raw body to the interaction controller
//! 2. **Controller** verifies the signature, then parses the interaction
//! 3. **Service** dispatches by interaction type and command name
//! 4. **Handlers** call the listing store or Discord and return a `CommandReply`
//! 5. **Controller** serializes the interaction response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;

#[cfg(test)]
pub mod test;
