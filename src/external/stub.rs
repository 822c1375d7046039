use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

use crate::entities::{
    Coordinates, PlaceDetails, PlaceSuggestion, ReverseGeocode, SuggestionKind, VenueCandidate,
};
use crate::error::{upstream_error, Error};
use crate::external::PlacesProvider;

/// In-memory provider. Searches for a held query park until that query is
/// released, which lets tests choose the completion order.
pub struct StubProvider {
    pub venues: Result<Vec<VenueCandidate>, Error>,
    pub suggestions: Vec<PlaceSuggestion>,
    pub details: Option<PlaceDetails>,
    pub geocode: Option<ReverseGeocode>,
    pub gates: HashMap<String, Notify>,
    pub calls: AtomicUsize,
    pub last_search: Mutex<Option<(String, u32, String)>>,
}

impl StubProvider {
    pub fn new(venues: Vec<VenueCandidate>) -> Self {
        Self {
            venues: Ok(venues),
            suggestions: vec![],
            details: None,
            geocode: None,
            gates: HashMap::new(),
            calls: AtomicUsize::new(0),
            last_search: Mutex::new(None),
        }
    }

    pub fn failing(err: Error) -> Self {
        Self {
            venues: Err(err),
            ..Self::new(vec![])
        }
    }

    pub fn holding(mut self, query: &str) -> Self {
        self.gates.insert(query.into(), Notify::new());
        self
    }

    pub fn release(&self, query: &str) {
        if let Some(gate) = self.gates.get(query) {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub fn candidate(id: &str, name: &str, coordinates: Option<Coordinates>) -> VenueCandidate {
    VenueCandidate {
        id: id.into(),
        name: name.into(),
        address: format!("{} street", id),
        coordinates,
        photo_refs: vec![format!("photo-{}", id)],
    }
}

#[async_trait]
impl PlacesProvider for StubProvider {
    async fn search_venues(
        &self,
        query: &str,
        _origin: Coordinates,
        radius_meters: u32,
        category: &str,
    ) -> Result<Vec<VenueCandidate>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_search.lock().unwrap() =
            Some((query.to_string(), radius_meters, category.to_string()));

        if let Some(gate) = self.gates.get(query) {
            gate.notified().await;
        }

        self.venues.clone()
    }

    async fn autocomplete(
        &self,
        _input: &str,
        _kind: SuggestionKind,
    ) -> Result<Vec<PlaceSuggestion>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.suggestions.clone())
    }

    async fn place_details(&self, _place_id: &str) -> Result<PlaceDetails, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.details.clone().ok_or_else(upstream_error)
    }

    async fn reverse_geocode(&self, _coordinates: Coordinates) -> Result<ReverseGeocode, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.geocode.clone().ok_or_else(upstream_error)
    }

    fn photo_url(&self, photo_ref: &str) -> String {
        format!("https://photos.test/{}", photo_ref)
    }
}
