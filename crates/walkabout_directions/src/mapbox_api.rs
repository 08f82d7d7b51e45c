use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::{error::ProviderError, kilometers::Kilometers, polyline, route_result::RouteResult};

pub const MAPBOX_WALKING_DIRECTIONS_PATH: &str = "/directions/v5/mapbox/walking/";

/// Mapbox encodes `polyline6` geometries with six decimals
const POLYLINE_PRECISION: u32 = 6;

/// Waypoint limit of the walking profile
pub const MAX_WAYPOINTS: usize = 25;

#[derive(Deserialize)]
struct MapboxDirectionsResponse {
    code: Option<String>,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<MapboxRoute>,
}

#[derive(Deserialize)]
struct MapboxRoute {
    /// Distance in meters
    distance: f64,

    /// Encoded polyline6, (lat, lon) pairs
    geometry: Option<String>,
}

pub struct MapboxDirectionsClientParams {
    pub access_token: String,
    pub base_url: String,
    pub timeout: Duration,
}

pub struct MapboxDirectionsClient {
    params: MapboxDirectionsClientParams,
    client: reqwest::Client,
}

impl MapboxDirectionsClient {
    pub fn new(params: MapboxDirectionsClientParams) -> Self {
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
        if points.len() > MAX_WAYPOINTS {
            return Err(ProviderError::NotFound(format!(
                "Mapbox walking routes accept at most {MAX_WAYPOINTS} waypoints, got {}",
                points.len()
            )));
        }

        let url = format!(
            "{}{}{}",
            self.params.base_url.trim_end_matches('/'),
            MAPBOX_WALKING_DIRECTIONS_PATH,
            crate::osrm_api::coordinates_path(points)
        );

        debug!("MapboxApi: requesting walking route for {} points", points.len());

        let response = self
            .client
            .get(url)
            .query(&[
                ("access_token", self.params.access_token.as_str()),
                ("geometries", "polyline6"),
                ("overview", "full"),
            ])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        parse_directions_response(status, &body)
    }
}

/// Turns a raw Mapbox answer into a normalized route.
pub fn parse_directions_response(status: u16, body: &str) -> Result<RouteResult, ProviderError> {
    if status == 429 {
        return Err(ProviderError::RateLimited);
    }

    let response: MapboxDirectionsResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(_) if !(200..300).contains(&status) => {
            return Err(ProviderError::from_status(status, body.to_string()));
        }
        Err(err) => return Err(err.into()),
    };

    let message = response.message.unwrap_or_default();

    match response.code.as_deref() {
        Some("Ok") => {
            let route = response.routes.into_iter().next().ok_or_else(|| {
                ProviderError::MalformedResponse(String::from("No route in Ok response"))
            })?;

            let geometry = route
                .geometry
                .as_deref()
                .map(|encoded| polyline::decode(encoded, POLYLINE_PRECISION))
                .transpose()?;

            Ok(RouteResult::new(
                Kilometers::from_meters(route.distance).rounded(),
                geometry,
            ))
        }
        Some("NoRoute") | Some("NoSegment") | Some("NoMatch") => {
            Err(ProviderError::NotFound(message))
        }
        Some(code) => Err(ProviderError::MalformedResponse(format!(
            "Unexpected code {code}: {message}"
        ))),
        None if !(200..300).contains(&status) => Err(ProviderError::from_status(status, message)),
        None => Err(ProviderError::MalformedResponse(String::from(
            "Missing response code",
        ))),
    }
}
