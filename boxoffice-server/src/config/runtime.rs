//! Validated runtime configuration.

use boxoffice_core::config::OfficeConfig;
use boxoffice_sdk::config::AdminAuth;
use std::net::SocketAddr;
use url::Url;

/// The fully validated configuration the server boots with.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Address the HTTP server binds to.
    pub listen: SocketAddr,
    /// Verifier for the admin secret header.
    pub admin_auth: AdminAuth,
    /// Construction-time office configuration (admin identity, refund
    /// window).
    pub office: OfficeConfig,
    /// Settlement endpoint for the HTTP payment rail.
    pub rail_endpoint: Url,
}
