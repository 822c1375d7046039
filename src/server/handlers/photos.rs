use axum::extract::{Extension, Path};
use axum::response::Redirect;

use crate::server::DynAPI;

pub async fn find(Extension(api): Extension<DynAPI>, Path(photo_ref): Path<String>) -> Redirect {
    Redirect::temporary(&api.photo_url(&photo_ref))
}
