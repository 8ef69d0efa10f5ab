//! Wire-level types exchanged over HTTP.
//!
//! `interaction` and `command` follow Discord's JSON shapes; `server` and `api`
//! are the listing feed DTOs.

pub mod api;
pub mod command;
pub mod interaction;
pub mod server;
