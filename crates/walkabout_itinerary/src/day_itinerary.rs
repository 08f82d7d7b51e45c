use jiff::civil::Date;

use crate::{
    location::Location,
    segment::{Segment, segment},
};

/// All locations of one day, kept in sequence order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayItinerary {
    date: Date,
    locations: Vec<Location>,
}

impl DayItinerary {
    pub fn new(date: Date, mut locations: Vec<Location>) -> Self {
        locations.sort_by_key(|location| location.sequence_order());

        Self { date, locations }
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn into_locations(self) -> Vec<Location> {
        self.locations
    }

    pub fn segments(&self) -> Vec<Segment<'_>> {
        segment(&self.locations)
    }
}
