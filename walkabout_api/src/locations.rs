use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use jiff::{Zoned, civil::Date};
use serde::{Deserialize, Serialize};
use tracing::info;
use walkabout_itinerary::{Location, LocationId, NewLocation};

use crate::day_view::{DayView, day_view};
use crate::error::ApiError;
use crate::state::AppState;

fn today() -> Date {
    Zoned::now().date()
}

pub async fn get_today_handler(State(state): State<Arc<AppState>>) -> DayView {
    day_view(&state, today()).await
}

pub async fn get_day_handler(
    Path(date): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<DayView, ApiError> {
    let date: Date = date
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid date '{date}', expected YYYY-MM-DD")))?;

    Ok(day_view(&state, date).await)
}

#[derive(Deserialize)]
pub struct PostLocationBody {
    /// Defaults to today
    date: Option<Date>,
    #[serde(flatten)]
    location: NewLocation,
}

#[derive(Serialize)]
pub struct PostLocationResponse {
    id: LocationId,
    success: bool,
}

pub async fn post_location_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PostLocationBody>,
) -> Result<Json<PostLocationResponse>, ApiError> {
    let date = body.date.unwrap_or_else(today);
    let location = state.store.add(date, body.location)?;

    Ok(Json(PostLocationResponse {
        id: location.id(),
        success: true,
    }))
}

#[derive(Serialize)]
pub struct DeleteLocationResponse {
    success: bool,
}

pub async fn delete_location_handler(
    Path(id): Path<LocationId>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DeleteLocationResponse>, ApiError> {
    state.store.delete(id)?;

    Ok(Json(DeleteLocationResponse { success: true }))
}

pub async fn toggle_break_handler(
    Path(id): Path<LocationId>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Location>, ApiError> {
    let location = state.store.toggle_break(id)?;
    info!(%id, break_after = location.break_after(), "Toggled break");

    Ok(Json(location))
}
