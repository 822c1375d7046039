use axum::extract::{rejection::QueryRejection, Extension, Json, Path, Query};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::engine::Outcome;
use crate::entities::{Coordinates, VenueOption};
use crate::error::Error;
use crate::server::{handlers::query_params, DynAPI};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    id: Uuid,
}

#[derive(Serialize, Deserialize)]
pub struct SearchParams {
    query: String,
    lat: Option<f64>,
    lng: Option<f64>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchResponse {
    Accepted { results: Vec<VenueOption> },
    Superseded,
}

pub async fn create(Extension(api): Extension<DynAPI>) -> Json<Session> {
    let id = api.open_session().await;

    Session { id }.into()
}

pub async fn close(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, Error> {
    api.close_session(id).await?;

    Ok(json!({}).into())
}

pub async fn search(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, Error> {
    let params = query_params(params)?;
    let origin = params.lat.zip(params.lng).map(|(lat, lng)| Coordinates::new(lat, lng));

    match api.search_nearby(id, params.query, origin).await {
        Outcome::Accepted(results) => Ok(SearchResponse::Accepted { results }.into()),
        Outcome::Superseded => Ok(SearchResponse::Superseded.into()),
        Outcome::Failed(err) => Err(err),
    }
}
