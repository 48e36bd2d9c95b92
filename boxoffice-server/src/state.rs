//! Application state shared across all request handlers.

use boxoffice_core::office::BoxOffice;
use boxoffice_sdk::config::AdminAuth;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Application state that is shared across all request handlers.
///
/// The office sits behind one async mutex: each operation runs to
/// completion (including its outbound transfer) before the next one is
/// observed, which is the execution model the state machine assumes.
#[derive(Clone)]
pub struct AppState {
    /// The event/ticket state machine.
    pub office: Arc<Mutex<BoxOffice>>,
    /// Verifier for the admin secret header.
    pub admin_auth: Arc<AdminAuth>,
}

impl AppState {
    /// Create a new AppState around a constructed office.
    pub fn new(office: BoxOffice, admin_auth: AdminAuth) -> Self {
        Self {
            office: Arc::new(Mutex::new(office)),
            admin_auth: Arc::new(admin_auth),
        }
    }
}
