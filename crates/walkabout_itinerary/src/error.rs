use thiserror::Error;

use crate::location::LocationId;

#[derive(Debug, Error, PartialEq)]
pub enum ItineraryError {
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Location {0} not found")]
    LocationNotFound(LocationId),
}
