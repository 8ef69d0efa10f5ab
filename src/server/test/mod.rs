//! Shared fixtures for unit tests: in-memory fakes of the outbound dependencies and
//! request signing helpers.

pub mod fake;
