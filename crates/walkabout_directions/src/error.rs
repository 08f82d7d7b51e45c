use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Rate limited by directions provider")]
    RateLimited,

    #[error("No route found: {0}")]
    NotFound(String),

    #[error("Network failure: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProviderErrorKind {
    RateLimited,
    NotFound,
    Network,
    MalformedResponse,
}

impl ProviderError {
    pub fn kind(&self) -> ProviderErrorKind {
        match self {
            ProviderError::RateLimited => ProviderErrorKind::RateLimited,
            ProviderError::NotFound(_) => ProviderErrorKind::NotFound,
            ProviderError::Network(_) => ProviderErrorKind::Network,
            ProviderError::MalformedResponse(_) => ProviderErrorKind::MalformedResponse,
        }
    }

    /// Maps a non-success HTTP status to an error. Statuses carrying a
    /// provider body (4xx with a `code`) are handled by the provider parsers.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            429 => ProviderError::RateLimited,
            404 => ProviderError::NotFound(message),
            _ => ProviderError::Network(format!("HTTP {status}: {message}")),
        }
    }
}

/// Request URLs may carry an access token, they never end up in the message.
impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        let error = error.without_url();

        if error.is_decode() {
            ProviderError::MalformedResponse(error.to_string())
        } else {
            ProviderError::Network(error.to_string())
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(error: serde_json::Error) -> Self {
        ProviderError::MalformedResponse(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(
            ProviderError::from_status(429, String::new()).kind(),
            ProviderErrorKind::RateLimited
        );
        assert_eq!(
            ProviderError::from_status(404, String::from("gone")).kind(),
            ProviderErrorKind::NotFound
        );
        assert_eq!(
            ProviderError::from_status(503, String::from("down")).kind(),
            ProviderErrorKind::Network
        );
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&ProviderErrorKind::MalformedResponse).unwrap();
        assert_eq!(json, "\"MALFORMED_RESPONSE\"");
    }
}
