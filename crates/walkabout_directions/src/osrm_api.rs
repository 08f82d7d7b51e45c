use std::time::Duration;

use geo_types::{Coord, LineString};
use serde::Deserialize;
use tracing::debug;

use crate::{error::ProviderError, kilometers::Kilometers, route_result::RouteResult};

pub const OSRM_FOOT_ROUTE_API_PATH: &str = "/route/v1/foot/";

#[derive(Deserialize)]
struct OsrmRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    /// Distance in meters
    distance: f64,
    geometry: Option<OsrmGeometry>,
}

#[derive(Deserialize)]
struct OsrmGeometry {
    /// GeoJSON order, [lon, lat]
    coordinates: Vec<[f64; 2]>,
}

pub struct OsrmDirectionsClientParams {
    pub osrm_url: String,
    pub timeout: Duration,
}

pub struct OsrmDirectionsClient {
    params: OsrmDirectionsClientParams,
    client: reqwest::Client,
}

/// Builds the `lon,lat;lon,lat` path segment shared by OSRM-style APIs.
pub fn coordinates_path(points: &[geo_types::Point]) -> String {
    let mut path = String::new();

    for (i, point) in points.iter().enumerate() {
        path.push_str(&format!("{},{}", point.x(), point.y()));

        if i < points.len() - 1 {
            path.push(';');
        }
    }

    path
}

impl OsrmDirectionsClient {
    pub fn new(params: OsrmDirectionsClientParams) -> Self {
        let client = reqwest::Client::builder()
            .timeout(params.timeout)
            .build()
            .unwrap_or_default();

        Self { params, client }
    }

    pub async fn fetch_route(
        &self,
        points: &[geo_types::Point],
    ) -> Result<RouteResult, ProviderError> {
        let mut url = self.params.osrm_url.trim_end_matches('/').to_string();
        url.push_str(OSRM_FOOT_ROUTE_API_PATH);
        url.push_str(&coordinates_path(points));

        debug!("OsrmApi: requesting foot route for {} points", points.len());

        let response = self
            .client
            .get(url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        parse_route_response(status, &body)
    }
}

/// Turns a raw OSRM answer into a normalized route.
pub fn parse_route_response(status: u16, body: &str) -> Result<RouteResult, ProviderError> {
    if status == 429 {
        return Err(ProviderError::RateLimited);
    }

    // OSRM answers client errors with a JSON body, anything else is a server problem
    let response: OsrmRouteResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(_) if !(200..300).contains(&status) => {
            return Err(ProviderError::from_status(status, body.to_string()));
        }
        Err(err) => return Err(err.into()),
    };

    let message = response.message.unwrap_or_default();

    match response.code.as_str() {
        "Ok" => {
            let route = response.routes.into_iter().next().ok_or_else(|| {
                ProviderError::MalformedResponse(String::from("No route in Ok response"))
            })?;

            let geometry = route.geometry.map(|geometry| {
                LineString::new(
                    geometry
                        .coordinates
                        .into_iter()
                        .map(|[lon, lat]| Coord { x: lon, y: lat })
                        .collect(),
                )
            });

            Ok(RouteResult::new(
                Kilometers::from_meters(route.distance).rounded(),
                geometry,
            ))
        }
        "NoRoute" | "NoSegment" | "NoMatch" => Err(ProviderError::NotFound(message)),
        other => Err(ProviderError::MalformedResponse(format!(
            "Unexpected code {other}: {message}"
        ))),
    }
}
