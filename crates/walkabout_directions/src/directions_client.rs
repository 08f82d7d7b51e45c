use std::{future::Future, time::Duration};

use tracing::{debug, info};

use crate::{
    config::DirectionsConfig,
    directions_provider::DirectionsProvider,
    error::ProviderError,
    mapbox_api::{MapboxDirectionsClient, MapboxDirectionsClientParams},
    osrm_api::{OsrmDirectionsClient, OsrmDirectionsClientParams},
    route_result::RouteResult,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything that can turn an ordered list of points into a walking route.
pub trait RouteProvider: Send + Sync {
    fn route(
        &self,
        points: &[geo_types::Point],
    ) -> impl Future<Output = Result<RouteResult, ProviderError>> + Send;
}

enum ActiveClient {
    Mapbox(MapboxDirectionsClient),
    Osrm(OsrmDirectionsClient),
}

/// Holds the single provider selected at startup.
pub struct DirectionsClient {
    provider: DirectionsProvider,
    client: ActiveClient,
}

impl DirectionsClient {
    pub fn new(config: DirectionsConfig) -> Self {
        let provider = config.provider();
        let client = match config {
            DirectionsConfig::Mapbox {
                access_token,
                base_url,
            } => ActiveClient::Mapbox(MapboxDirectionsClient::new(MapboxDirectionsClientParams {
                access_token,
                base_url,
                timeout: REQUEST_TIMEOUT,
            })),
            DirectionsConfig::Osrm { osrm_url } => {
                ActiveClient::Osrm(OsrmDirectionsClient::new(OsrmDirectionsClientParams {
                    osrm_url,
                    timeout: REQUEST_TIMEOUT,
                }))
            }
        };

        info!("Directions provider: {}", provider);

        Self { provider, client }
    }

    pub fn provider(&self) -> DirectionsProvider {
        self.provider
    }
}

impl RouteProvider for DirectionsClient {
    async fn route(&self, points: &[geo_types::Point]) -> Result<RouteResult, ProviderError> {
        if points.len() < 2 {
            return Err(ProviderError::NotFound(format!(
                "A route needs at least 2 points, got {}",
                points.len()
            )));
        }

        debug!("Routing {} points with {}", points.len(), self.provider);

        match &self.client {
            ActiveClient::Mapbox(client) => client.fetch_route(points).await,
            ActiveClient::Osrm(client) => client.fetch_route(points).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ProviderErrorKind;

    use super::*;

    #[tokio::test]
    async fn test_single_point_is_rejected_without_request() {
        let client = DirectionsClient::new(DirectionsConfig::Osrm {
            // Unroutable address, any request would fail with a network error
            osrm_url: String::from("http://127.0.0.1:9"),
        });

        let error = client
            .route(&[geo_types::Point::new(4.35, 50.85)])
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ProviderErrorKind::NotFound);
    }

    #[test]
    fn test_provider_follows_config() {
        let client = DirectionsClient::new(DirectionsConfig::Mapbox {
            access_token: String::from("pk.test"),
            base_url: String::from("https://api.mapbox.com"),
        });

        assert_eq!(client.provider(), DirectionsProvider::Mapbox);
    }
}
