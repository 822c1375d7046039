use crate::{
    engine::{
        guard::{StaleRequestGuard, Token},
        projector::project,
    },
    entities::{Coordinates, VenueOption},
    error::{invalid_input_error, Error},
    external::DynPlacesProvider,
};

const MIN_QUERY_CHARS: usize = 2;

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The response belongs to the latest search and may be shown.
    Accepted(Vec<VenueOption>),
    /// A newer search was issued; drop this response without telling the user.
    Superseded,
    Failed(Error),
}

#[derive(Clone, Debug)]
pub struct SearchRequest {
    pub query: String,
    pub origin: Coordinates,
    pub token: Token,
}

pub struct NearbySearchPipeline {
    provider: DynPlacesProvider,
    guard: StaleRequestGuard,
    radius_meters: u32,
    category: String,
}

impl NearbySearchPipeline {
    pub fn new(
        provider: DynPlacesProvider,
        guard: StaleRequestGuard,
        radius_meters: u32,
        category: String,
    ) -> Self {
        Self {
            provider,
            guard,
            radius_meters,
            category,
        }
    }

    #[tracing::instrument(name = "NearbySearchPipeline::search", skip(self))]
    pub async fn search(&self, query: &str, origin: Option<Coordinates>) -> Outcome {
        let query = query.trim();

        let origin = match origin {
            Some(origin) if origin.is_valid() => origin,
            _ => return Outcome::Failed(invalid_input_error()),
        };

        if query.chars().count() < MIN_QUERY_CHARS {
            return Outcome::Failed(invalid_input_error());
        }

        let request = SearchRequest {
            query: query.to_string(),
            origin,
            token: self.guard.issue(),
        };

        let candidates = match self
            .provider
            .search_venues(
                &request.query,
                request.origin,
                self.radius_meters,
                &self.category,
            )
            .await
        {
            Ok(candidates) => candidates,
            Err(err) => {
                let stale = !self.guard.accept(request.token);
                tracing::warn!(stale, "search for {:?} failed: {}", request.query, err);
                return Outcome::Failed(err);
            }
        };

        let results = project(candidates, &request.origin, &request.query);

        if !self.guard.accept(request.token) {
            tracing::debug!("search for {:?} superseded", request.query);
            return Outcome::Superseded;
        }

        tracing::info!("search for {:?} returned {} venues", request.query, results.len());

        Outcome::Accepted(results)
    }
}
