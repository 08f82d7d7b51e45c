use jiff::civil::Date;
use schemars::{JsonSchema, schema_for};
use serde::Deserialize;

use crate::{
    day_itinerary::DayItinerary,
    error::ItineraryError,
    location::{Location, LocationId, NewLocation},
};

/// One day of locations as stored in an itinerary file.
#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Itinerary")]
pub struct JsonItinerary {
    /// Calendar day, `YYYY-MM-DD`
    pub date: Date,
    pub locations: Vec<JsonLocation>,
}

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Location")]
pub struct JsonLocation {
    /// Defaults to the position in the file, starting at 1
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Defaults to the position in the file
    pub sequence_order: Option<i64>,
    #[serde(default)]
    pub break_after: bool,
}

impl JsonItinerary {
    pub fn into_itinerary(self) -> Result<DayItinerary, ItineraryError> {
        let date = self.date;
        let locations = self
            .locations
            .into_iter()
            .enumerate()
            .map(|(index, location)| {
                Location::new(
                    LocationId::new(location.id.unwrap_or(index as u64 + 1)),
                    date,
                    location.sequence_order.unwrap_or(index as i64),
                    NewLocation {
                        name: location.name,
                        display_name: location.display_name,
                        latitude: location.latitude,
                        longitude: location.longitude,
                        break_after: location.break_after,
                    },
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let itinerary = DayItinerary::new(date, locations);

        // Sequence order must be a strict total order within the day
        if let Some(pair) = itinerary
            .locations()
            .windows(2)
            .find(|pair| pair[0].sequence_order() == pair[1].sequence_order())
        {
            return Err(ItineraryError::InvalidLocation(format!(
                "'{}' and '{}' share sequence_order {}",
                pair[0].name(),
                pair[1].name(),
                pair[0].sequence_order()
            )));
        }

        Ok(itinerary)
    }
}

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(JsonItinerary))
}
