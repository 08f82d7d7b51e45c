use std::collections::BTreeMap;

use jiff::civil::Date;
use parking_lot::RwLock;
use tracing::info;

use crate::{
    day_itinerary::DayItinerary,
    error::ItineraryError,
    location::{Location, LocationId, NewLocation},
};

#[derive(Default)]
struct StoreInner {
    next_id: u64,
    locations: BTreeMap<LocationId, Location>,
}

/// In-memory location repository shared by request handlers.
#[derive(Default)]
pub struct LocationStore {
    inner: RwLock<StoreInner>,
}

impl LocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a location at the end of the given day.
    pub fn add(&self, date: Date, new_location: NewLocation) -> Result<Location, ItineraryError> {
        new_location.validate()?;

        let mut inner = self.inner.write();

        let sequence_order = inner
            .locations
            .values()
            .filter(|location| location.date() == date)
            .map(|location| location.sequence_order())
            .max()
            .map_or(0, |max| max + 1);

        inner.next_id += 1;
        let id = LocationId::new(inner.next_id);
        let location = Location::new(id, date, sequence_order, new_location)?;

        info!(%id, %date, sequence_order, name = location.name(), "Added location");
        inner.locations.insert(id, location.clone());

        Ok(location)
    }

    pub fn get(&self, id: LocationId) -> Option<Location> {
        self.inner.read().locations.get(&id).cloned()
    }

    pub fn delete(&self, id: LocationId) -> Result<(), ItineraryError> {
        self.inner
            .write()
            .locations
            .remove(&id)
            .map(|_| info!(%id, "Deleted location"))
            .ok_or(ItineraryError::LocationNotFound(id))
    }

    /// Flips the break-after marker and returns the updated location.
    pub fn toggle_break(&self, id: LocationId) -> Result<Location, ItineraryError> {
        let mut inner = self.inner.write();
        let location = inner
            .locations
            .get_mut(&id)
            .ok_or(ItineraryError::LocationNotFound(id))?;

        location.set_break_after(!location.break_after());

        Ok(location.clone())
    }

    /// Locations of a day in sequence order.
    pub fn locations_for(&self, date: Date) -> Vec<Location> {
        let mut locations: Vec<Location> = self
            .inner
            .read()
            .locations
            .values()
            .filter(|location| location.date() == date)
            .cloned()
            .collect();

        locations.sort_by_key(|location| (location.sequence_order(), location.id()));
        locations
    }

    pub fn itinerary(&self, date: Date) -> DayItinerary {
        DayItinerary::new(date, self.locations_for(date))
    }
}
