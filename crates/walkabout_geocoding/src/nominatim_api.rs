use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GeocodingError;

pub const NOMINATIM_SEARCH_API_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const USER_AGENT: &str = "WalkaboutTracker/1.0";

const MIN_QUERY_CHARS: usize = 3;
const RESULT_LIMIT: &str = "5";

/// Half size, in degrees, of the box results are biased towards.
const BIAS_VIEWBOX_DEGREES: f64 = 0.5;

#[derive(Deserialize)]
struct NominatimPlace {
    name: Option<String>,
    display_name: Option<String>,
    lat: String,
    lon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceSuggestion {
    pub name: String,
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Queries shorter than three characters are never sent.
pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_CHARS
}

pub struct NominatimClient {
    search_url: String,
    client: reqwest::Client,
}

impl Default for NominatimClient {
    fn default() -> Self {
        Self::new(NOMINATIM_SEARCH_API_URL.to_string())
    }
}

impl NominatimClient {
    pub fn new(search_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        Self { search_url, client }
    }

    /// Autocomplete search. `bias` moves nearby places up without excluding the others.
    pub async fn search(
        &self,
        query: &str,
        bias: Option<geo_types::Point>,
    ) -> Result<Vec<PlaceSuggestion>, GeocodingError> {
        if !is_searchable(query) {
            return Ok(vec![]);
        }
        let query = query.trim();

        let mut params: Vec<(&str, String)> = vec![
            ("q", query.to_string()),
            ("format", String::from("json")),
            ("addressdetails", String::from("1")),
            ("limit", RESULT_LIMIT.to_string()),
        ];

        if let Some(point) = bias {
            params.push(("viewbox", viewbox(point)));
            params.push(("bounded", String::from("0")));
        }

        debug!("Nominatim: searching '{}' (biased: {})", query, bias.is_some());

        let response = self
            .client
            .get(&self.search_url)
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GeocodingError::Api { status, message });
        }

        let body = response.text().await?;
        parse_search_response(&body)
    }
}

/// `lon1,lat1,lon2,lat2` box around the point.
fn viewbox(point: geo_types::Point) -> String {
    format!(
        "{},{},{},{}",
        point.x() - BIAS_VIEWBOX_DEGREES,
        point.y() + BIAS_VIEWBOX_DEGREES,
        point.x() + BIAS_VIEWBOX_DEGREES,
        point.y() - BIAS_VIEWBOX_DEGREES
    )
}

fn parse_search_response(body: &str) -> Result<Vec<PlaceSuggestion>, GeocodingError> {
    let places: Vec<NominatimPlace> = serde_json::from_str(body)?;

    Ok(places
        .into_iter()
        .filter_map(|place| {
            let latitude = place.lat.parse::<f64>().ok()?;
            let longitude = place.lon.parse::<f64>().ok()?;
            let display_name = place.display_name.unwrap_or_default();

            let name = place
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| {
                    display_name
                        .split(',')
                        .next()
                        .unwrap_or_default()
                        .trim()
                        .to_string()
                });

            Some(PlaceSuggestion {
                name,
                display_name,
                latitude,
                longitude,
            })
        })
        .collect())
}
