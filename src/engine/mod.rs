mod guard;
mod location_api;
mod pipeline;
mod projector;
mod search_api;

pub use guard::{SearchState, StaleRequestGuard, Token};
pub use pipeline::{NearbySearchPipeline, Outcome, SearchRequest};
pub use projector::project;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{api::API, external::DynPlacesProvider};

const DEFAULT_SESSION_IDLE: Duration = Duration::from_secs(30 * 60);

struct Session {
    pipeline: Arc<NearbySearchPipeline>,
    last_used: Instant,
}

pub struct Engine {
    provider: DynPlacesProvider,
    radius_meters: u32,
    category: String,
    session_idle: Duration,
    sessions: Mutex<HashMap<Uuid, Session>>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip(provider))]
    pub fn new(provider: DynPlacesProvider, radius_meters: u32, category: String) -> Self {
        Self {
            provider,
            radius_meters,
            category,
            session_idle: DEFAULT_SESSION_IDLE,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Sessions not used for longer than `idle` are dropped the next time a
    /// session is opened.
    pub fn with_session_idle(mut self, idle: Duration) -> Self {
        self.session_idle = idle;
        self
    }

    fn new_pipeline(&self) -> NearbySearchPipeline {
        let guard = StaleRequestGuard::new(Arc::new(SearchState::default()));

        NearbySearchPipeline::new(
            self.provider.clone(),
            guard,
            self.radius_meters,
            self.category.clone(),
        )
    }
}

impl API for Engine {}
