//! HTTP header names used by the boxoffice APIs.

/// Carries the caller's party identity, asserted by the fronting gateway.
pub const PARTY_HEADER: &str = "Boxoffice-Party";

/// Carries the plaintext admin secret, verified server-side against an
/// argon2-hashed value.
pub const ADMIN_AUTH_HEADER: &str = "Boxoffice-Admin-Authorization";
