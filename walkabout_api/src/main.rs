mod day_view;
mod error;
mod locations;
mod search;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::Method;
use axum::routing::{delete, get, post};
use axum::{Router, serve};
use mimalloc::MiMalloc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};
use walkabout_directions::{DirectionsClient, config::DirectionsConfig};
use walkabout_geocoding::{GeolocationCache, IpGeolocationClient, NominatimClient};
use walkabout_itinerary::{DistanceAggregator, LocationStore};

use crate::locations::{
    delete_location_handler, get_day_handler, get_today_handler, post_location_handler,
    toggle_break_handler,
};
use crate::search::search_handler;
use crate::state::AppState;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const BIND_ADDRESS_ENV_VAR: &str = "WALKABOUT_BIND_ADDRESS";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5001";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = DirectionsConfig::from_env()?;

    let state = Arc::new(AppState {
        store: LocationStore::new(),
        aggregator: DistanceAggregator::new(DirectionsClient::new(config)),
        geolocation_cache: GeolocationCache::new(),
        ip_geolocation: IpGeolocationClient::default(),
        nominatim: NominatimClient::default(),
    });

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_origin(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/search", get(search_handler))
        .route("/api/locations", post(post_location_handler))
        .route("/api/locations/today", get(get_today_handler))
        .route("/api/locations/day/{date}", get(get_day_handler))
        .route("/api/locations/{id}", delete(delete_location_handler))
        .route("/api/locations/{id}/break", post(toggle_break_handler))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state);

    let bind_address = std::env::var(BIND_ADDRESS_ENV_VAR)
        .unwrap_or_else(|_| String::from(DEFAULT_BIND_ADDRESS));
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on {}", bind_address);

    serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
