use thiserror::Error;

use crate::directions_provider::DirectionsProvider;

const PROVIDER_ENV_VAR: &str = "WALKABOUT_DIRECTIONS_PROVIDER";
const MAPBOX_TOKEN_ENV_VAR: &str = "MAPBOX_ACCESS_TOKEN";
const MAPBOX_BASE_URL_ENV_VAR: &str = "MAPBOX_BASE_URL";
const OSRM_URL_ENV_VAR: &str = "OSRM_URL";

pub const DEFAULT_MAPBOX_BASE_URL: &str = "https://api.mapbox.com";
pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown directions provider '{0}', expected 'mapbox' or 'osrm'")]
    UnknownProvider(String),

    #[error("{0} must be set when the mapbox provider is selected")]
    MissingAccessToken(&'static str),
}

/// Everything needed to build the one active directions client.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectionsConfig {
    Mapbox {
        access_token: String,
        base_url: String,
    },
    Osrm {
        osrm_url: String,
    },
}

impl DirectionsConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = match lookup(PROVIDER_ENV_VAR) {
            Some(value) => value.parse()?,
            None => DirectionsProvider::Mapbox,
        };

        match provider {
            DirectionsProvider::Mapbox => {
                let access_token = lookup(MAPBOX_TOKEN_ENV_VAR)
                    .filter(|token| !token.trim().is_empty())
                    .ok_or(ConfigError::MissingAccessToken(MAPBOX_TOKEN_ENV_VAR))?;

                Ok(DirectionsConfig::Mapbox {
                    access_token,
                    base_url: lookup(MAPBOX_BASE_URL_ENV_VAR)
                        .unwrap_or_else(|| DEFAULT_MAPBOX_BASE_URL.to_string()),
                })
            }
            DirectionsProvider::Osrm => Ok(DirectionsConfig::Osrm {
                osrm_url: lookup(OSRM_URL_ENV_VAR).unwrap_or_else(|| DEFAULT_OSRM_URL.to_string()),
            }),
        }
    }

    pub fn provider(&self) -> DirectionsProvider {
        match self {
            DirectionsConfig::Mapbox { .. } => DirectionsProvider::Mapbox,
            DirectionsConfig::Osrm { .. } => DirectionsProvider::Osrm,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_to_mapbox() {
        let config =
            DirectionsConfig::from_lookup(lookup_from(&[("MAPBOX_ACCESS_TOKEN", "pk.test")]))
                .unwrap();

        assert_eq!(
            config,
            DirectionsConfig::Mapbox {
                access_token: String::from("pk.test"),
                base_url: String::from(DEFAULT_MAPBOX_BASE_URL),
            }
        );
    }

    #[test]
    fn test_mapbox_requires_token() {
        let result = DirectionsConfig::from_lookup(lookup_from(&[(
            "WALKABOUT_DIRECTIONS_PROVIDER",
            "mapbox",
        )]));

        assert!(matches!(result, Err(ConfigError::MissingAccessToken(_))));
    }

    #[test]
    fn test_osrm_is_token_free() {
        let config = DirectionsConfig::from_lookup(lookup_from(&[(
            "WALKABOUT_DIRECTIONS_PROVIDER",
            "osrm",
        )]))
        .unwrap();

        assert_eq!(config.provider(), DirectionsProvider::Osrm);
        assert_eq!(
            config,
            DirectionsConfig::Osrm {
                osrm_url: String::from(DEFAULT_OSRM_URL)
            }
        );
    }

    #[test]
    fn test_unknown_provider() {
        let result = DirectionsConfig::from_lookup(lookup_from(&[(
            "WALKABOUT_DIRECTIONS_PROVIDER",
            "valhalla",
        )]));

        assert!(matches!(result, Err(ConfigError::UnknownProvider(_))));
    }
}
