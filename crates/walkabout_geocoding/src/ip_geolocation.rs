use std::{net::IpAddr, time::Duration};

use serde::Deserialize;
use tracing::debug;

use crate::error::GeocodingError;

pub const IP_API_URL: &str = "http://ip-api.com/json";

#[derive(Deserialize)]
struct IpApiResponse {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Resolves a client IP address to an approximate position, used to bias place search.
pub struct IpGeolocationClient {
    base_url: String,
    client: reqwest::Client,
}

impl Default for IpGeolocationClient {
    fn default() -> Self {
        Self::new(IP_API_URL.to_string())
    }
}

/// Loopback, private and link-local addresses have no public position.
pub fn is_resolvable(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(ip) => {
            !(ip.is_loopback()
                || ip.is_private()
                || ip.is_link_local()
                || ip.is_unspecified()
                || ip.is_broadcast())
        }
        IpAddr::V6(ip) => {
            !(ip.is_loopback()
                || ip.is_unspecified()
                || ip.is_unique_local()
                || ip.is_unicast_link_local())
        }
    }
}

impl IpGeolocationClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_default();

        Self { base_url, client }
    }

    pub async fn locate(&self, client_ip: &str) -> Result<geo_types::Point, GeocodingError> {
        let ip: IpAddr = client_ip
            .trim()
            .parse()
            .map_err(|_| GeocodingError::NotResolvable(client_ip.to_string()))?;

        if !is_resolvable(&ip) {
            return Err(GeocodingError::NotResolvable(ip.to_string()));
        }

        debug!("IpGeolocation: locating {}", ip);

        let response = self
            .client
            .get(format!("{}/{}", self.base_url.trim_end_matches('/'), ip))
            .query(&[("fields", "status,message,lat,lon")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GeocodingError::Api { status, message });
        }

        let body = response.text().await?;
        parse_ip_api_response(&ip.to_string(), &body)
    }
}

fn parse_ip_api_response(ip: &str, body: &str) -> Result<geo_types::Point, GeocodingError> {
    let response: IpApiResponse = serde_json::from_str(body)?;

    if let ("success", Some(lat), Some(lon)) = (response.status.as_str(), response.lat, response.lon)
    {
        return Ok(geo_types::Point::new(lon, lat));
    }

    Err(GeocodingError::NotResolvable(format!(
        "{} ({})",
        ip,
        response.message.unwrap_or(response.status)
    )))
}
