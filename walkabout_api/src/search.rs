use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::extract::{ConnectInfo, Query, State};
use axum::http::HeaderMap;
use serde::Deserialize;
use tracing::{debug, warn};
use walkabout_geocoding::{PlaceSuggestion, is_searchable};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// First hop of `X-Forwarded-For` when behind a proxy, the peer address otherwise.
fn client_ip(headers: &HeaderMap, remote_addr: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(String::from)
        .unwrap_or_else(|| remote_addr.ip().to_string())
}

/// Short queries return nothing before the client is geolocated.
async fn suggestions(state: &AppState, client_ip: &str, query: &str) -> Vec<PlaceSuggestion> {
    if !is_searchable(query) {
        return vec![];
    }

    let bias = state
        .geolocation_cache
        .get_or_resolve(client_ip, || state.ip_geolocation.locate(client_ip))
        .await
        .inspect_err(|err| debug!("No location bias for {}: {}", client_ip, err))
        .ok();

    match state.nominatim.search(query, bias).await {
        Ok(suggestions) => suggestions,
        Err(err) => {
            warn!("Search for '{}' failed: {}", query, err);
            vec![]
        }
    }
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    ConnectInfo(remote_addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<PlaceSuggestion>> {
    let client_ip = client_ip(&headers, remote_addr);

    Json(suggestions(&state, &client_ip, &query.q).await)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::http::HeaderValue;
    use tokio::net::TcpListener;
    use walkabout_directions::{DirectionsClient, config::DirectionsConfig};
    use walkabout_geocoding::{GeolocationCache, IpGeolocationClient, NominatimClient};
    use walkabout_itinerary::{DistanceAggregator, LocationStore};

    use super::*;

    /// Accepts and drops connections, counting them.
    async fn closing_server() -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let connections = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&connections);
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                drop(socket);
            }
        });

        (url, connections)
    }

    fn create_state(ip_geolocation_url: String) -> AppState {
        AppState {
            store: LocationStore::new(),
            aggregator: DistanceAggregator::new(DirectionsClient::new(DirectionsConfig::Osrm {
                osrm_url: String::from("http://127.0.0.1:9"),
            })),
            geolocation_cache: GeolocationCache::new(),
            ip_geolocation: IpGeolocationClient::new(ip_geolocation_url),
            nominatim: NominatimClient::new(String::from("http://127.0.0.1:9/search")),
        }
    }

    #[tokio::test]
    async fn test_short_query_does_not_geolocate() {
        let (url, connections) = closing_server().await;
        let state = create_state(url);

        for query in ["", "a", "ab", " ab "] {
            assert!(suggestions(&state, "81.246.12.3", query).await.is_empty());
        }

        assert_eq!(connections.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_search_geolocates_public_client() {
        let (url, connections) = closing_server().await;
        let state = create_state(url);

        let places = suggestions(&state, "81.246.12.3", "Atomium").await;

        assert!(places.is_empty());
        assert!(connections.load(Ordering::SeqCst) >= 1);
        assert!(state.geolocation_cache.is_empty());
    }

    #[test]
    fn test_client_ip() {
        let remote_addr: SocketAddr = "10.0.0.7:51234".parse().unwrap();
        let mut headers = HeaderMap::new();

        assert_eq!(client_ip(&headers, remote_addr), "10.0.0.7");

        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("81.246.12.3, 10.0.0.1"),
        );
        assert_eq!(client_ip(&headers, remote_addr), "81.246.12.3");

        headers.insert("x-forwarded-for", HeaderValue::from_static(" "));
        assert_eq!(client_ip(&headers, remote_addr), "10.0.0.7");
    }
}
