pub mod config;
pub mod directions_client;
pub mod directions_provider;
pub mod error;
pub mod kilometers;
pub mod mapbox_api;
pub mod osrm_api;
pub mod polyline;
pub mod route_result;

pub use directions_client::{DirectionsClient, RouteProvider};
pub use error::{ProviderError, ProviderErrorKind};
pub use kilometers::Kilometers;
pub use route_result::RouteResult;
