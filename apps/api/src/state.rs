use std::sync::Arc;

use tokio::sync::Mutex;

use crate::session::ManagerSession;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Single-user session. Every request takes the lock, so mutations run
    /// one at a time and each completes before the next begins.
    pub session: Arc<Mutex<ManagerSession>>,
}

impl AppState {
    pub fn new(session: ManagerSession) -> Self {
        AppState {
            session: Arc::new(Mutex::new(session)),
        }
    }
}
