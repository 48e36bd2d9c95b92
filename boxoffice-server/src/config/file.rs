//! TOML file configuration structures.
//!
//! These structs directly map to the `boxoffice-config.toml` file format.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use url::Url;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub server: ServerSection,
    pub admin: AdminSection,
    #[serde(default)]
    pub office: OfficeSection,
    pub rail: RailSection,
}

/// Server configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    /// The address and port to listen on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,
}

fn default_listen_addr() -> SocketAddr {
    "0.0.0.0:8080".parse().expect("valid default address")
}

/// Admin configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSection {
    /// The administrator's party identity.
    pub party: String,
    /// The admin secret. If this is plaintext (doesn't start with `$argon2`),
    /// it will be hashed and the config file will be rewritten.
    pub secret: String,
}

/// Box office policy section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficeSection {
    /// How long before the event date cancellation closes.
    #[serde(default = "default_refund_window_hours")]
    pub refund_window_hours: i64,
}

impl Default for OfficeSection {
    fn default() -> Self {
        Self {
            refund_window_hours: default_refund_window_hours(),
        }
    }
}

fn default_refund_window_hours() -> i64 {
    24
}

/// Payment rail section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RailSection {
    /// Settlement endpoint that receives transfer instructions as JSON.
    pub endpoint: Url,
}

impl FileConfig {
    /// Check if the admin secret is already hashed (argon2 format).
    pub fn is_admin_secret_hashed(&self) -> bool {
        self.admin.secret.starts_with("$argon2")
    }
}
