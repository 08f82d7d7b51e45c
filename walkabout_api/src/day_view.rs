use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use geojson::Geometry;
use jiff::civil::Date;
use serde::Serialize;
use walkabout_directions::Kilometers;
use walkabout_itinerary::{DayDistanceReport, DayItinerary, Location};

use crate::state::AppState;

/// Everything the map needs to draw one day.
#[derive(Serialize)]
pub struct DayView {
    date: Date,
    locations: Vec<Location>,
    total_distance_km: Kilometers,
    /// GeoJSON LineStrings, one per routed segment
    route_geometry: Vec<Geometry>,
    segments: usize,
    failed_segments: usize,
}

impl DayView {
    pub fn new(itinerary: DayItinerary, report: DayDistanceReport) -> Self {
        let route_geometry = report
            .route_geometry
            .iter()
            .map(|line| Geometry::new(geojson::Value::from(line)))
            .collect();

        DayView {
            date: itinerary.date(),
            locations: itinerary.into_locations(),
            total_distance_km: report.total_distance_km,
            route_geometry,
            segments: report.segments,
            failed_segments: report.failed_segments,
        }
    }
}

impl IntoResponse for DayView {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn day_view(state: &AppState, date: Date) -> DayView {
    let itinerary = state.store.itinerary(date);
    let report = state.aggregator.aggregate_day(&itinerary).await;

    DayView::new(itinerary, report)
}
