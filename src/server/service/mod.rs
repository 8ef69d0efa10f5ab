//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the data layer and own the webhook's
//! behaviour:
//!
//! - **Signature** (`signature`) - Ed25519 verification of inbound webhook requests
//! - **Interaction** (`interaction/`) - Dispatch of verified interactions and the
//!   `/bump` and `/invite` command handlers
//! - **Registrar** (`registrar`) - Startup publication of the slash command schema
//! - **Discord** (`discord`) - Outbound Discord REST calls behind the `DiscordApi` trait
//! - **Server** (`server`) - Listing store behind the `ServerRecordStore` trait and the
//!   read-only listing feed
//!
//! The two traits are the seams where tests substitute in-memory fakes; production
//! wires Serenity and SeaORM implementations into `AppState`.

pub mod discord;
pub mod interaction;
pub mod registrar;
pub mod server;
pub mod signature;
