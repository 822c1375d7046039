use super::Engine;

use async_trait::async_trait;

use crate::{
    api::LocationAPI,
    entities::{Coordinates, Locality, PlaceDetails, PlaceSuggestion, SuggestionKind},
    error::{invalid_input_error, Error},
};

const MIN_INPUT_CHARS: usize = 2;

#[async_trait]
impl LocationAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn suggest_locations(
        &self,
        input: String,
        kind: SuggestionKind,
    ) -> Result<Vec<PlaceSuggestion>, Error> {
        let input = input.trim();

        if input.chars().count() < MIN_INPUT_CHARS {
            return Err(invalid_input_error());
        }

        self.provider.autocomplete(input, kind).await
    }

    #[tracing::instrument(skip(self))]
    async fn find_place(&self, place_id: String) -> Result<PlaceDetails, Error> {
        if place_id.trim().is_empty() {
            return Err(invalid_input_error());
        }

        self.provider.place_details(place_id.trim()).await
    }

    #[tracing::instrument(skip(self))]
    async fn locate(&self, coordinates: Coordinates) -> Result<Locality, Error> {
        if !coordinates.is_valid() {
            return Err(invalid_input_error());
        }

        let geocode = self.provider.reverse_geocode(coordinates).await?;

        Ok(geocode.into())
    }

    fn photo_url(&self, photo_ref: &str) -> String {
        self.provider.photo_url(photo_ref)
    }
}
