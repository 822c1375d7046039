mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{delete, get, post},
    Router,
};

use crate::api::API;
use crate::server::handlers::{photos, places, sessions};

type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    Router::new()
        .route("/sessions", post(sessions::create))
        .route("/sessions/:id", delete(sessions::close))
        .route("/sessions/:id/search", get(sessions::search))
        .route("/places/suggestions", get(places::find_suggestions))
        .route("/places/:id", get(places::find))
        .route("/locality", get(places::locate))
        .route("/photos/:photo_ref", get(photos::find))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) {
    let app = router(api);

    tracing::info!("listening on {}", addr);

    if let Err(err) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!("server error: {}", err);
    }
}
