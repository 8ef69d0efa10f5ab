//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's REST API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::channel::create_test_channel;
//!
//! let text = create_test_channel(111111111, 123456789, "general", 0);
//! let voice = create_test_channel(222222222, 123456789, "Lounge", 2);
//! ```

pub mod channel;
