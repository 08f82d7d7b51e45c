use futures::future::join_all;
use tracing::{debug, warn};
use walkabout_directions::{ProviderError, RouteProvider, RouteResult};

use crate::{
    day_itinerary::DayItinerary,
    location::Location,
    report::DayDistanceReport,
    segment::{Segment, segment},
};

#[derive(Debug)]
pub enum SegmentOutcome {
    Routed(RouteResult),
    Failed(ProviderError),
    /// Fewer than two locations, nothing to route
    Skipped,
}

/// Routes every segment of a day concurrently and sums the distances.
///
/// A failing segment is logged and counted, it never fails the day.
pub struct DistanceAggregator<P> {
    provider: P,
}

impl<P: RouteProvider> DistanceAggregator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Outcomes are returned in segment order, whatever order the requests complete in.
    pub async fn route_segments(&self, segments: &[Segment<'_>]) -> Vec<SegmentOutcome> {
        let requests = segments.iter().enumerate().map(|(index, segment)| async move {
            if !segment.is_routable() {
                return SegmentOutcome::Skipped;
            }

            match self.provider.route(&segment.points()).await {
                Ok(route) => {
                    debug!(segment = index, distance = %route.distance, "Routed segment");
                    SegmentOutcome::Routed(route)
                }
                Err(err) => {
                    warn!(
                        segment = index,
                        kind = ?err.kind(),
                        locations = segment.len(),
                        "Segment routing failed: {err}"
                    );
                    SegmentOutcome::Failed(err)
                }
            }
        });

        join_all(requests).await
    }

    /// `locations` must already be in sequence order.
    pub async fn aggregate(&self, locations: &[Location]) -> DayDistanceReport {
        let segments = segment(locations);
        let outcomes = self.route_segments(&segments).await;

        DayDistanceReport::from_outcomes(outcomes)
    }

    pub async fn aggregate_day(&self, itinerary: &DayItinerary) -> DayDistanceReport {
        self.aggregate(itinerary.locations()).await
    }
}
