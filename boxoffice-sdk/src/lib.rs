//! SDK for boxoffice, a headless box office for ticketed events.
//!
//! Contains the wire objects shared between the server and its callers,
//! the admin credential verification used by the server, and an optional
//! typed HTTP client behind the `client` feature.

pub mod config;
pub mod headers;
pub mod objects;

#[cfg(feature = "client")]
pub mod client;
