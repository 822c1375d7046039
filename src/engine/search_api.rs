use super::{Engine, Outcome, Session};

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::{
    api::SearchAPI,
    entities::Coordinates,
    error::{invalid_input_error, Error},
};

#[async_trait]
impl SearchAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn open_session(&self) -> Uuid {
        let id = Uuid::new_v4();
        let session = Session {
            pipeline: Arc::new(self.new_pipeline()),
            last_used: Instant::now(),
        };

        let mut sessions = self.sessions.lock().await;

        let before = sessions.len();
        sessions.retain(|_, session| session.last_used.elapsed() < self.session_idle);
        if sessions.len() < before {
            tracing::info!("evicted {} idle sessions", before - sessions.len());
        }

        sessions.insert(id, session);

        tracing::info!("opened session {}", id);

        id
    }

    #[tracing::instrument(skip(self))]
    async fn close_session(&self, id: Uuid) -> Result<(), Error> {
        self.sessions
            .lock()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(invalid_input_error)
    }

    #[tracing::instrument(skip(self))]
    async fn search_nearby(
        &self,
        session_id: Uuid,
        query: String,
        origin: Option<Coordinates>,
    ) -> Outcome {
        let maybe_pipeline = self
            .sessions
            .lock()
            .await
            .get_mut(&session_id)
            .map(|session| {
                session.last_used = Instant::now();
                session.pipeline.clone()
            });

        match maybe_pipeline {
            Some(pipeline) => pipeline.search(&query, origin).await,
            None => {
                tracing::warn!("unknown session {}", session_id);
                Outcome::Failed(invalid_input_error())
            }
        }
    }
}
