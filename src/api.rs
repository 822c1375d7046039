use async_trait::async_trait;
use uuid::Uuid;

use crate::engine::Outcome;
use crate::entities::{Coordinates, Locality, PlaceDetails, PlaceSuggestion, SuggestionKind};
use crate::error::Error;

#[async_trait]
pub trait SearchAPI {
    async fn open_session(&self) -> Uuid;
    async fn close_session(&self, id: Uuid) -> Result<(), Error>;
    async fn search_nearby(
        &self,
        session_id: Uuid,
        query: String,
        origin: Option<Coordinates>,
    ) -> Outcome;
}

#[async_trait]
pub trait LocationAPI {
    async fn suggest_locations(
        &self,
        input: String,
        kind: SuggestionKind,
    ) -> Result<Vec<PlaceSuggestion>, Error>;
    async fn find_place(&self, place_id: String) -> Result<PlaceDetails, Error>;
    async fn locate(&self, coordinates: Coordinates) -> Result<Locality, Error>;
    fn photo_url(&self, photo_ref: &str) -> String;
}

pub trait API: SearchAPI + LocationAPI {}
