use std::sync::Arc;

use tokio::sync::RwLock;

use crate::ai_client::GeminiClient;
use crate::catalog::careers::CareerCatalog;
use crate::models::profile::UserProfile;
use crate::profile::store::ProfileStore;
use crate::quiz::collector::ResponseCollector;

/// The single active session: the user's profile plus the in-progress survey
/// responses. One writer context at a time; no multi-user contention.
#[derive(Debug, Default)]
pub struct Session {
    pub profile: UserProfile,
    pub collector: ResponseCollector,
}

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CareerCatalog>,
    pub session: Arc<RwLock<Session>>,
    /// Profile persistence collaborator. Best-effort; swap for the in-memory
    /// implementation in tests.
    pub store: Arc<dyn ProfileStore>,
    pub ai: GeminiClient,
}
