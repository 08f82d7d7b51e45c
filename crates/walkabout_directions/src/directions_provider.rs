use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// The routing backend chosen by the operator. Exactly one is active per process,
/// there is no fallback from one to the other.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DirectionsProvider {
    /// https://docs.mapbox.com/api/navigation/directions/ with the `mapbox/walking` profile
    Mapbox,

    /// Public OSRM server with the `foot` profile, slower and lower quality paths
    Osrm,
}

impl Display for DirectionsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DirectionsProvider::Mapbox => "mapbox",
                DirectionsProvider::Osrm => "osrm",
            }
        )
    }
}

impl FromStr for DirectionsProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mapbox" => Ok(DirectionsProvider::Mapbox),
            "osrm" => Ok(DirectionsProvider::Osrm),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}
