//! Configuration types shared between the server and tooling.
//!
//! The actual config loading/parsing is handled by the server crate;
//! these are the validated runtime pieces.

mod admin;

pub use admin::AdminAuth;
