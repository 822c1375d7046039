use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    City,
    Postcode,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceSuggestion {
    pub label: String,
    pub place_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    pub fn has_type(&self, kind: &str) -> bool {
        self.types.iter().any(|t| t == kind)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub place_id: String,
    pub coordinates: Coordinates,
    pub formatted_address: String,
    pub address_components: Vec<AddressComponent>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReverseGeocode {
    pub place_id: String,
    pub address_components: Vec<AddressComponent>,
}

/// The city, state and postcode a set of address components resolves to.
/// Components that are absent are left empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locality {
    pub place_id: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
}

impl Locality {
    pub fn from_components(components: &[AddressComponent]) -> Self {
        let mut locality = Locality::default();

        for component in components {
            if component.has_type("locality") {
                locality.city = component.long_name.clone();
            }
            if component.has_type("administrative_area_level_1") {
                locality.state = component.short_name.clone();
            }
            if component.has_type("postal_code") {
                locality.postcode = component.long_name.clone();
            }
        }

        locality
    }
}

impl From<ReverseGeocode> for Locality {
    fn from(geocode: ReverseGeocode) -> Self {
        Self {
            place_id: geocode.place_id,
            ..Self::from_components(&geocode.address_components)
        }
    }
}
