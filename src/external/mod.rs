pub mod google_maps;

#[cfg(test)]
pub(crate) mod stub;

use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{
    Coordinates, PlaceDetails, PlaceSuggestion, ReverseGeocode, SuggestionKind, VenueCandidate,
};
use crate::error::Error;

/// The mapping provider as seen by the engine. Implementations validate
/// provider payloads and report mismatches as provider errors.
#[async_trait]
pub trait PlacesProvider {
    async fn search_venues(
        &self,
        query: &str,
        origin: Coordinates,
        radius_meters: u32,
        category: &str,
    ) -> Result<Vec<VenueCandidate>, Error>;

    async fn autocomplete(
        &self,
        input: &str,
        kind: SuggestionKind,
    ) -> Result<Vec<PlaceSuggestion>, Error>;

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, Error>;

    async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<ReverseGeocode, Error>;

    /// Builds the photo URL; no request is made.
    fn photo_url(&self, photo_ref: &str) -> String;
}

pub type DynPlacesProvider = Arc<dyn PlacesProvider + Send + Sync>;
