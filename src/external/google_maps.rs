use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{
    config::Config,
    entities::{
        AddressComponent, Coordinates, PlaceDetails, PlaceSuggestion, ReverseGeocode,
        SuggestionKind, VenueCandidate,
    },
    error::{configuration_error, malformed_payload_error, upstream_error, Error},
    external::PlacesProvider,
};

#[derive(Clone, Debug)]
pub struct GoogleMaps {
    client: reqwest::Client,
    base: Url,
    key: String,
    region: String,
    photo_max_width: u32,
}

#[derive(Debug, Deserialize)]
struct Response<T> {
    status: String,
    error_message: Option<String>,
    result: Option<T>,
    results: Option<T>,
    predictions: Option<T>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Coordinates,
}

/// Nearby results may carry a geometry without a location; such entries are
/// kept as candidates without coordinates.
#[derive(Debug, Deserialize)]
struct NearbyGeometry {
    location: Option<Coordinates>,
}

#[derive(Debug, Deserialize)]
struct NearbyResult {
    place_id: String,
    name: String,
    #[serde(default)]
    vicinity: String,
    geometry: Option<NearbyGeometry>,
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    photo_reference: String,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    place_id: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct DetailsResult {
    place_id: String,
    #[serde(default)]
    formatted_address: String,
    geometry: Geometry,
    #[serde(default)]
    address_components: Vec<AddressComponent>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    place_id: String,
    #[serde(default)]
    address_components: Vec<AddressComponent>,
}

impl From<NearbyResult> for VenueCandidate {
    fn from(result: NearbyResult) -> Self {
        Self {
            id: result.place_id,
            name: result.name,
            address: result.vicinity,
            coordinates: result.geometry.and_then(|g| g.location),
            photo_refs: result.photos.into_iter().map(|p| p.photo_reference).collect(),
        }
    }
}

impl GoogleMaps {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let base = Url::parse(&format!("https://{}", config.api_base))
            .map_err(|_| configuration_error("GOOGLE_MAPS_API_BASE"))?;

        let client = reqwest::Client::builder()
            .timeout(config.provider_timeout)
            .build()?;

        Ok(Self {
            client,
            base,
            key: config.api_key.clone(),
            region: config.region.clone(),
            photo_max_width: config.photo_max_width,
        })
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(path);
        url
    }

    async fn fetch(&self, path: &str, params: &[(&str, String)]) -> Result<String, Error> {
        let res = self
            .client
            .get(self.endpoint(path))
            .query(&[("key", &self.key)])
            .query(params)
            .send()
            .await?;

        check_status(res.status())?;

        Ok(res.text().await?)
    }
}

#[async_trait]
impl PlacesProvider for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn search_venues(
        &self,
        query: &str,
        origin: Coordinates,
        radius_meters: u32,
        category: &str,
    ) -> Result<Vec<VenueCandidate>, Error> {
        let body = self
            .fetch(
                "/maps/api/place/nearbysearch/json",
                &[
                    ("keyword", query.to_string()),
                    ("location", origin.into()),
                    ("radius", radius_meters.to_string()),
                    ("type", category.to_string()),
                ],
            )
            .await?;

        parse_nearby(&body)
    }

    #[tracing::instrument(skip(self))]
    async fn autocomplete(
        &self,
        input: &str,
        kind: SuggestionKind,
    ) -> Result<Vec<PlaceSuggestion>, Error> {
        let types = match kind {
            SuggestionKind::City => "(cities)",
            SuggestionKind::Postcode => "postal_code",
        };

        let body = self
            .fetch(
                "/maps/api/place/autocomplete/json",
                &[
                    ("input", input.to_string()),
                    ("types", types.to_string()),
                    ("components", format!("country:{}", self.region)),
                ],
            )
            .await?;

        parse_predictions(&body)
    }

    #[tracing::instrument(skip(self))]
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, Error> {
        let body = self
            .fetch(
                "/maps/api/place/details/json",
                &[
                    ("place_id", place_id.to_string()),
                    (
                        "fields",
                        "place_id,formatted_address,geometry,address_components".to_string(),
                    ),
                ],
            )
            .await?;

        parse_details(&body)
    }

    #[tracing::instrument(skip(self))]
    async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<ReverseGeocode, Error> {
        let body = self
            .fetch("/maps/api/geocode/json", &[("latlng", coordinates.into())])
            .await?;

        parse_geocode(&body)
    }

    fn photo_url(&self, photo_ref: &str) -> String {
        let mut url = self.endpoint("/maps/api/place/photo");
        url.query_pairs_mut()
            .append_pair("maxwidth", &self.photo_max_width.to_string())
            .append_pair("photo_reference", photo_ref)
            .append_pair("key", &self.key);

        url.into()
    }
}

fn check_status(status: StatusCode) -> Result<(), Error> {
    if status != StatusCode::OK {
        tracing::warn!("upstream responded with {}", status.as_u16());
        return Err(upstream_error());
    }

    Ok(())
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<Response<T>, Error> {
    let data: Response<T> = serde_json::from_str(body).map_err(|err| {
        tracing::warn!("malformed upstream payload: {}", err);
        malformed_payload_error()
    })?;

    Ok(data)
}

fn check_provider_status<T>(data: &Response<T>, allow_empty: bool) -> Result<(), Error> {
    if data.status == "OK" || (allow_empty && data.status == "ZERO_RESULTS") {
        return Ok(());
    }

    tracing::warn!(
        "upstream status {}: {}",
        data.status,
        data.error_message.as_deref().unwrap_or("")
    );

    Err(upstream_error())
}

fn parse_nearby(body: &str) -> Result<Vec<VenueCandidate>, Error> {
    let data: Response<Vec<NearbyResult>> = decode(body)?;
    check_provider_status(&data, true)?;

    if data.status == "ZERO_RESULTS" {
        return Ok(vec![]);
    }

    let results = data.results.ok_or_else(malformed_payload_error)?;

    Ok(results.into_iter().map(VenueCandidate::from).collect())
}

fn parse_predictions(body: &str) -> Result<Vec<PlaceSuggestion>, Error> {
    let data: Response<Vec<Prediction>> = decode(body)?;
    check_provider_status(&data, true)?;

    let predictions = data.predictions.unwrap_or_default();

    Ok(predictions
        .into_iter()
        .map(|p| PlaceSuggestion {
            label: p.description,
            place_id: p.place_id,
        })
        .collect())
}

fn parse_details(body: &str) -> Result<PlaceDetails, Error> {
    let data: Response<DetailsResult> = decode(body)?;
    check_provider_status(&data, false)?;

    let result = data.result.ok_or_else(malformed_payload_error)?;

    if !result.geometry.location.is_valid() {
        return Err(malformed_payload_error());
    }

    Ok(PlaceDetails {
        place_id: result.place_id,
        coordinates: result.geometry.location,
        formatted_address: result.formatted_address,
        address_components: result.address_components,
    })
}

fn parse_geocode(body: &str) -> Result<ReverseGeocode, Error> {
    let data: Response<Vec<GeocodeResult>> = decode(body)?;
    check_provider_status(&data, false)?;

    let first = data
        .results
        .and_then(|results| results.into_iter().next())
        .ok_or_else(upstream_error)?;

    Ok(ReverseGeocode {
        place_id: first.place_id,
        address_components: first.address_components,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn client() -> GoogleMaps {
        let config = Config::from_lookup(|key| match key {
            "GOOGLE_MAPS_API_KEY" => Some("secret".into()),
            _ => None,
        })
        .unwrap();

        GoogleMaps::new(&config).unwrap()
    }

    #[test]
    fn nearby_results_become_candidates() {
        let body = json!({
            "status": "OK",
            "results": [
                {
                    "place_id": "a",
                    "name": "Pizza Hut",
                    "vicinity": "1 Swanston St",
                    "geometry": { "location": { "lat": -37.81, "lng": 144.96 } },
                    "photos": [{ "photo_reference": "ref-1", "height": 10, "width": 10 }]
                },
                {
                    "place_id": "b",
                    "name": "Pasta Bar"
                }
            ]
        })
        .to_string();

        let candidates = parse_nearby(&body).unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].id, "a");
        assert_eq!(candidates[0].address, "1 Swanston St");
        assert_eq!(candidates[0].coordinates, Some(Coordinates::new(-37.81, 144.96)));
        assert_eq!(candidates[0].photo_refs, vec!["ref-1".to_string()]);
        assert_eq!(candidates[1].coordinates, None);
        assert!(candidates[1].photo_refs.is_empty());
    }

    #[test]
    fn geometry_without_location_keeps_the_rest() {
        let body = json!({
            "status": "OK",
            "results": [
                {
                    "place_id": "a",
                    "name": "Pizza Hut",
                    "geometry": { "location": { "lat": -37.81, "lng": 144.96 } }
                },
                {
                    "place_id": "b",
                    "name": "Pizza Place",
                    "geometry": { "viewport": {} }
                }
            ]
        })
        .to_string();

        let candidates = parse_nearby(&body).unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].coordinates, Some(Coordinates::new(-37.81, 144.96)));
        assert_eq!(candidates[1].id, "b");
        assert_eq!(candidates[1].coordinates, None);
    }

    #[test]
    fn zero_results_is_empty() {
        let body = json!({ "status": "ZERO_RESULTS", "results": [] }).to_string();
        assert!(parse_nearby(&body).unwrap().is_empty());

        let body = json!({ "status": "ZERO_RESULTS" }).to_string();
        assert!(parse_nearby(&body).unwrap().is_empty());
    }

    #[test]
    fn denied_requests_are_provider_errors() {
        let body = json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        })
        .to_string();

        assert_eq!(parse_nearby(&body).unwrap_err().kind(), ErrorKind::Provider);
    }

    #[test]
    fn malformed_payloads_are_provider_errors() {
        let err = parse_nearby("<html>oops</html>").unwrap_err();
        assert_eq!(err, malformed_payload_error());

        let body = json!({ "status": "OK" }).to_string();
        assert_eq!(parse_nearby(&body).unwrap_err(), malformed_payload_error());

        let body = json!({ "status": "OK", "results": [{ "name": "no id" }] }).to_string();
        assert_eq!(parse_nearby(&body).unwrap_err(), malformed_payload_error());
    }

    #[test]
    fn predictions_become_suggestions() {
        let body = json!({
            "status": "OK",
            "predictions": [
                { "place_id": "p1", "description": "Melbourne VIC, Australia" },
                { "place_id": "p2", "description": "Melton VIC, Australia" }
            ]
        })
        .to_string();

        let suggestions = parse_predictions(&body).unwrap();

        assert_eq!(
            suggestions,
            vec![
                PlaceSuggestion {
                    label: "Melbourne VIC, Australia".into(),
                    place_id: "p1".into(),
                },
                PlaceSuggestion {
                    label: "Melton VIC, Australia".into(),
                    place_id: "p2".into(),
                },
            ]
        );
    }

    #[test]
    fn details_require_a_valid_location() {
        let body = json!({
            "status": "OK",
            "result": {
                "place_id": "p1",
                "formatted_address": "Melbourne VIC, Australia",
                "geometry": { "location": { "lat": -37.8136, "lng": 144.9631 } },
                "address_components": [
                    { "long_name": "Melbourne", "short_name": "Melbourne", "types": ["locality"] }
                ]
            }
        })
        .to_string();

        let details = parse_details(&body).unwrap();
        assert_eq!(details.coordinates, Coordinates::new(-37.8136, 144.9631));
        assert_eq!(details.address_components.len(), 1);

        let body = json!({
            "status": "OK",
            "result": {
                "place_id": "p1",
                "geometry": { "location": { "lat": 137.0, "lng": 0.0 } }
            }
        })
        .to_string();

        assert_eq!(parse_details(&body).unwrap_err(), malformed_payload_error());
    }

    #[test]
    fn geocode_takes_the_first_result() {
        let body = json!({
            "status": "OK",
            "results": [
                { "place_id": "first", "address_components": [] },
                { "place_id": "second", "address_components": [] }
            ]
        })
        .to_string();

        assert_eq!(parse_geocode(&body).unwrap().place_id, "first");

        let body = json!({ "status": "ZERO_RESULTS", "results": [] }).to_string();
        assert_eq!(parse_geocode(&body).unwrap_err().kind(), ErrorKind::Provider);
    }

    #[test]
    fn http_status_mapping() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert_eq!(
            check_status(StatusCode::FORBIDDEN).unwrap_err(),
            upstream_error()
        );
        assert_eq!(
            check_status(StatusCode::INTERNAL_SERVER_ERROR).unwrap_err(),
            upstream_error()
        );
    }

    #[test]
    fn photo_url_is_built_locally() {
        let url = client().photo_url("abc def");

        assert_eq!(
            url,
            "https://maps.googleapis.com/maps/api/place/photo?maxwidth=400&photo_reference=abc+def&key=secret"
        );
    }
}
