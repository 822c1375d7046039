use axum::extract::{rejection::QueryRejection, Extension, Json, Path, Query};
use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, Locality, PlaceDetails, PlaceSuggestion, SuggestionKind};
use crate::error::Error;
use crate::server::{handlers::query_params, DynAPI};

#[derive(Serialize, Deserialize)]
pub struct SuggestionParams {
    input: String,
    kind: SuggestionKind,
}

pub async fn find_suggestions(
    Extension(api): Extension<DynAPI>,
    params: Result<Query<SuggestionParams>, QueryRejection>,
) -> Result<Json<Vec<PlaceSuggestion>>, Error> {
    let params = query_params(params)?;
    let suggestions = api.suggest_locations(params.input, params.kind).await?;

    Ok(suggestions.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<String>,
) -> Result<Json<PlaceDetails>, Error> {
    let place = api.find_place(id).await?;

    Ok(place.into())
}

pub async fn locate(
    Extension(api): Extension<DynAPI>,
    coordinates: Result<Query<Coordinates>, QueryRejection>,
) -> Result<Json<Locality>, Error> {
    let coordinates = query_params(coordinates)?;
    let locality = api.locate(coordinates).await?;

    Ok(locality.into())
}
