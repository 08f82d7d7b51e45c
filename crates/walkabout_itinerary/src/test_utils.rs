use std::time::Duration;

use geo_types::LineString;
use jiff::civil::{Date, date};
use parking_lot::Mutex;
use walkabout_directions::{
    Kilometers, ProviderError, ProviderErrorKind, RouteProvider, RouteResult,
};

use crate::location::{Location, LocationId, NewLocation};

pub const TEST_DATE: Date = date(2025, 5, 3);

/// Locations walking north from Brussels' Grand-Place, one per (name, break_after).
pub fn create_locations(markers: &[(&str, bool)]) -> Vec<Location> {
    markers
        .iter()
        .enumerate()
        .map(|(index, (name, break_after))| {
            Location::new(
                LocationId::new(index as u64 + 1),
                TEST_DATE,
                index as i64,
                NewLocation {
                    name: name.to_string(),
                    display_name: format!("{name}, Brussels"),
                    latitude: 50.8467 + index as f64 * 0.001,
                    longitude: 4.3525,
                    break_after: *break_after,
                },
            )
            .unwrap()
        })
        .collect()
}

pub enum ScriptedRoute {
    Distance(f64),
    DistanceWithoutGeometry(f64),
    Fail(ProviderErrorKind),
}

struct Script {
    first_point: geo_types::Point,
    route: ScriptedRoute,
    delay: Option<Duration>,
}

/// Answers routes by the first point of the request, records every request.
#[derive(Default)]
pub struct ScriptedProvider {
    scripts: Vec<Script>,
    calls: Mutex<Vec<Vec<geo_types::Point>>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, starting_at: &Location, route: ScriptedRoute) -> Self {
        self.scripts.push(Script {
            first_point: starting_at.into(),
            route,
            delay: None,
        });
        self
    }

    pub fn with_delayed_route(
        mut self,
        starting_at: &Location,
        route: ScriptedRoute,
        delay: Duration,
    ) -> Self {
        self.scripts.push(Script {
            first_point: starting_at.into(),
            route,
            delay: Some(delay),
        });
        self
    }

    pub fn calls(&self) -> Vec<Vec<geo_types::Point>> {
        self.calls.lock().clone()
    }
}

impl RouteProvider for ScriptedProvider {
    async fn route(&self, points: &[geo_types::Point]) -> Result<RouteResult, ProviderError> {
        self.calls.lock().push(points.to_vec());

        let script = self
            .scripts
            .iter()
            .find(|script| points.first() == Some(&script.first_point));

        let Some(script) = script else {
            return Err(ProviderError::NotFound(String::from("unscripted route")));
        };

        if let Some(delay) = script.delay {
            tokio::time::sleep(delay).await;
        }

        let geometry = LineString::from(
            points
                .iter()
                .map(|point| (point.x(), point.y()))
                .collect::<Vec<_>>(),
        );

        match script.route {
            ScriptedRoute::Distance(km) => Ok(RouteResult::new(Kilometers::new(km), Some(geometry))),
            ScriptedRoute::DistanceWithoutGeometry(km) => {
                Ok(RouteResult::new(Kilometers::new(km), None))
            }
            ScriptedRoute::Fail(kind) => Err(match kind {
                ProviderErrorKind::RateLimited => ProviderError::RateLimited,
                ProviderErrorKind::NotFound => ProviderError::NotFound(String::from("no route")),
                ProviderErrorKind::Network => ProviderError::Network(String::from("timeout")),
                ProviderErrorKind::MalformedResponse => {
                    ProviderError::MalformedResponse(String::from("garbage"))
                }
            }),
        }
    }
}
