pub mod aggregator;
pub mod day_itinerary;
pub mod error;
pub mod json;
pub mod location;
pub mod report;
pub mod segment;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;

pub use aggregator::{DistanceAggregator, SegmentOutcome};
pub use day_itinerary::DayItinerary;
pub use error::ItineraryError;
pub use location::{Location, LocationId, NewLocation};
pub use report::DayDistanceReport;
pub use segment::{Segment, segment};
pub use store::LocationStore;
