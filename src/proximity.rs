//! Shelter proximity filtering
//!
//! Finds shelters within a radius of a reference coordinate, ordered by
//! ascending great-circle distance.

use crate::config::ProximityConfig;
use crate::models::{Coordinates, Shelter};

/// Radius-bounded shelter search around a reference point
#[derive(Debug, Clone)]
pub struct ProximityFilter {
    radius_meters: f64,
}

impl ProximityFilter {
    /// Create a filter with the given radius in meters
    #[must_use]
    pub fn new(radius_meters: f64) -> Self {
        Self { radius_meters }
    }

    /// Create a filter from pipeline configuration
    #[must_use]
    pub fn from_config(config: &ProximityConfig) -> Self {
        Self::new(config.radius_meters)
    }

    /// Search radius in meters
    #[must_use]
    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    /// Shelters within the radius of `reference`, closest first
    ///
    /// Ties are broken by input order (stable sort) so results are
    /// deterministic. Empty input or no matches yield an empty vec.
    #[must_use]
    pub fn nearby<'a>(&self, shelters: &'a [Shelter], reference: &Coordinates) -> Vec<&'a Shelter> {
        self.nearby_with_distance(shelters, reference)
            .into_iter()
            .map(|(shelter, _)| shelter)
            .collect()
    }

    /// Like [`nearby`](Self::nearby) but keeps the computed distance in meters
    #[must_use]
    pub fn nearby_with_distance<'a>(
        &self,
        shelters: &'a [Shelter],
        reference: &Coordinates,
    ) -> Vec<(&'a Shelter, f64)> {
        let mut results: Vec<(&Shelter, f64)> = shelters
            .iter()
            .map(|shelter| (shelter, distance_meters(reference, &shelter.coordinates())))
            .filter(|(_, distance)| *distance <= self.radius_meters)
            .collect();

        results.sort_by(|a, b| a.1.total_cmp(&b.1));
        results
    }
}

/// Great-circle distance between two coordinates in meters
#[must_use]
pub fn distance_meters(from: &Coordinates, to: &Coordinates) -> f64 {
    let km = haversine::distance(
        haversine::Location {
            latitude: from.latitude,
            longitude: from.longitude,
        },
        haversine::Location {
            latitude: to.latitude,
            longitude: to.longitude,
        },
        haversine::Units::Kilometers,
    );
    km * 1000.0
}
