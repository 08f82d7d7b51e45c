use crate::location::Location;

/// A contiguous walking run of one day. Only the last location may carry a break.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'a> {
    locations: &'a [Location],
}

impl<'a> Segment<'a> {
    pub fn locations(&self) -> &'a [Location] {
        self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// A single standalone point has nothing to walk to.
    pub fn is_routable(&self) -> bool {
        self.locations.len() >= 2
    }

    pub fn points(&self) -> Vec<geo_types::Point> {
        self.locations.iter().map(|location| location.into()).collect()
    }
}

/// Splits locations, already in sequence order, after every break-after marker.
///
/// A break on the last location does not produce an empty trailing segment and
/// an empty day has no segments.
pub fn segment(locations: &[Location]) -> Vec<Segment<'_>> {
    locations
        .split_inclusive(|location| location.break_after())
        .map(|locations| Segment { locations })
        .collect()
}
