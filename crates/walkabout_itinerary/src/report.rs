use geo_types::LineString;
use walkabout_directions::Kilometers;

use crate::aggregator::SegmentOutcome;

/// Walking distance of one day, summed over every segment that could be routed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayDistanceReport {
    pub total_distance_km: Kilometers,
    /// One geometry per routed segment, in segment order
    pub route_geometry: Vec<LineString<f64>>,
    /// Routable segments, those with at least two locations
    pub segments: usize,
    pub failed_segments: usize,
}

impl DayDistanceReport {
    pub fn from_outcomes(outcomes: Vec<SegmentOutcome>) -> Self {
        let mut report = Self::default();

        for outcome in outcomes {
            match outcome {
                SegmentOutcome::Routed(route) => {
                    report.segments += 1;
                    report.total_distance_km += route.distance;
                    if let Some(geometry) = route.geometry {
                        report.route_geometry.push(geometry);
                    }
                }
                SegmentOutcome::Failed(_) => {
                    report.segments += 1;
                    report.failed_segments += 1;
                }
                SegmentOutcome::Skipped => {}
            }
        }

        report.total_distance_km = report.total_distance_km.rounded();
        report
    }

    pub fn has_failures(&self) -> bool {
        self.failed_segments > 0
    }
}
