pub mod error;
pub mod geolocation_cache;
pub mod ip_geolocation;
pub mod nominatim_api;

pub use error::GeocodingError;
pub use geolocation_cache::GeolocationCache;
pub use ip_geolocation::IpGeolocationClient;
pub use nominatim_api::{NominatimClient, PlaceSuggestion, is_searchable};
