use std::sync::Arc;

use nearby::config::Config;
use nearby::engine::Engine;
use nearby::error::Error;
use nearby::external::google_maps::GoogleMaps;
use nearby::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env().map_err(|err| {
        tracing::error!("{}", err);
        err
    })?;

    let provider = GoogleMaps::new(&config)?;
    let engine = Engine::new(Arc::new(provider), config.radius_meters, config.category.clone())
        .with_session_idle(config.session_idle);

    serve(engine, config.bind_addr).await;

    Ok(())
}
