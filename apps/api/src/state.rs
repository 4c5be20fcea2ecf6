use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup apart from its listing memo.
    pub catalog: Arc<Catalog>,
    pub sessions: SessionStore,
    pub config: Config,
}
