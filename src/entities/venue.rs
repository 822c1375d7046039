use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

/// A venue as reported by the places provider, before projection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VenueCandidate {
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinates: Option<Coordinates>,
    pub photo_refs: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VenueOption {
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub distance_km: f64,
    pub photo_refs: Vec<String>,
}

impl VenueOption {
    pub fn from_candidate(
        candidate: VenueCandidate,
        coordinates: Coordinates,
        distance_km: f64,
    ) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name,
            address: candidate.address,
            coordinates,
            distance_km,
            photo_refs: candidate.photo_refs,
        }
    }
}
