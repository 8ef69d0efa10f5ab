//! HTTP request handlers.
//!
//! - `interaction` - Discord Interactions webhook
//! - `server` - Read-only listing feed

pub mod interaction;
pub mod server;

#[cfg(test)]
mod test;
