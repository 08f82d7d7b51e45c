use jiff::civil::Date;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ItineraryError;

#[derive(
    Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct LocationId(u64);

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl LocationId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for LocationId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A visited place on a given day. Only `break_after` can change once created.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Location {
    id: LocationId,
    date: Date,
    name: String,
    display_name: String,
    latitude: f64,
    longitude: f64,
    sequence_order: i64,
    break_after: bool,
}

impl Location {
    pub fn new(
        id: LocationId,
        date: Date,
        sequence_order: i64,
        new_location: NewLocation,
    ) -> Result<Self, ItineraryError> {
        new_location.validate()?;

        Ok(Self {
            id,
            date,
            name: new_location.name,
            display_name: new_location.display_name,
            latitude: new_location.latitude,
            longitude: new_location.longitude,
            sequence_order,
            break_after: new_location.break_after,
        })
    }

    pub fn id(&self) -> LocationId {
        self.id
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn lat(&self) -> f64 {
        self.latitude
    }

    pub fn lon(&self) -> f64 {
        self.longitude
    }

    pub fn sequence_order(&self) -> i64 {
        self.sequence_order
    }

    pub fn break_after(&self) -> bool {
        self.break_after
    }

    pub(crate) fn set_break_after(&mut self, break_after: bool) {
        self.break_after = break_after;
    }
}

impl From<&Location> for geo_types::Point<f64> {
    fn from(location: &Location) -> Self {
        geo_types::Point::new(location.longitude, location.latitude)
    }
}

/// Payload for appending a location to a day.
#[derive(Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub break_after: bool,
}

impl NewLocation {
    pub fn validate(&self) -> Result<(), ItineraryError> {
        if self.name.trim().is_empty() {
            return Err(ItineraryError::InvalidLocation(String::from(
                "name must not be empty",
            )));
        }

        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ItineraryError::InvalidLocation(format!(
                "latitude {} is outside [-90, 90]",
                self.latitude
            )));
        }

        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ItineraryError::InvalidLocation(format!(
                "longitude {} is outside [-180, 180]",
                self.longitude
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn new_location(latitude: f64, longitude: f64) -> NewLocation {
        NewLocation {
            name: String::from("Atomium"),
            display_name: String::from("Place de l'Atomium 1, 1020 Brussels"),
            latitude,
            longitude,
            break_after: false,
        }
    }

    #[test]
    fn test_point_is_lon_lat() {
        let location = Location::new(
            LocationId::new(1),
            date(2025, 5, 3),
            0,
            new_location(50.8949, 4.3415),
        )
        .unwrap();

        let point: geo_types::Point = (&location).into();

        assert_eq!(point.x(), 4.3415);
        assert_eq!(point.y(), 50.8949);
    }

    #[test]
    fn test_validation() {
        assert!(new_location(90.0, 180.0).validate().is_ok());
        assert!(new_location(90.5, 4.0).validate().is_err());
        assert!(new_location(50.0, -180.1).validate().is_err());
        assert!(new_location(f64::NAN, 4.0).validate().is_err());

        let mut unnamed = new_location(50.0, 4.0);
        unnamed.name = String::from("   ");
        assert!(matches!(
            unnamed.validate(),
            Err(ItineraryError::InvalidLocation(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let location = Location::new(
            LocationId::new(7),
            date(2025, 5, 3),
            2,
            new_location(50.8949, 4.3415),
        )
        .unwrap();

        let json = serde_json::to_value(&location).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["date"], "2025-05-03");
        assert_eq!(json["sequence_order"], 2);
        assert_eq!(json["break_after"], false);
        assert_eq!(json["latitude"], 50.8949);
    }
}
