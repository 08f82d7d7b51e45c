use walkabout_directions::DirectionsClient;
use walkabout_geocoding::{GeolocationCache, IpGeolocationClient, NominatimClient};
use walkabout_itinerary::{DistanceAggregator, LocationStore};

pub struct AppState {
    pub store: LocationStore,
    pub aggregator: DistanceAggregator<DirectionsClient>,
    pub geolocation_cache: GeolocationCache,
    pub ip_geolocation: IpGeolocationClient,
    pub nominatim: NominatimClient,
}
