use geo_types::LineString;

use crate::kilometers::Kilometers;

/// RouteResult holds the walking distance and path of one routed sequence of points.
/// Geometry coordinates are always (longitude, latitude), whatever the provider sent.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub distance: Kilometers,

    // Providers may answer without a path
    pub geometry: Option<LineString<f64>>,
}

impl RouteResult {
    pub fn new(distance: Kilometers, geometry: Option<LineString<f64>>) -> Self {
        Self { distance, geometry }
    }
}
