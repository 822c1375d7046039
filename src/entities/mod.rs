mod coordinates;
mod place;
mod venue;

pub use coordinates::Coordinates;
pub use place::{
    AddressComponent, Locality, PlaceDetails, PlaceSuggestion, ReverseGeocode, SuggestionKind,
};
pub use venue::{VenueCandidate, VenueOption};
