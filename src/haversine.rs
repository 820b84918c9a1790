//! Haversine distance provider.
//!
//! Uses great-circle distance between coordinates, clamped to the planner's
//! distance bound. Ignores roads but needs no network.

use crate::distance::PlaceholderDistance;
use crate::model::Location;
use crate::traits::{DistanceEstimator, MAX_DISTANCE};

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle kilometres between two locations, capped at [`MAX_DISTANCE`].
///
/// Locations without coordinates fall back to [`PlaceholderDistance`].
#[derive(Debug, Clone, Default)]
pub struct HaversineDistance {
    fallback: PlaceholderDistance,
}

impl HaversineDistance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate haversine distance between two points in kilometers.
    pub(crate) fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }
}

impl DistanceEstimator for HaversineDistance {
    fn distance(&self, from: &Location, to: &Location) -> f64 {
        match (from.coordinates, to.coordinates) {
            (Some(a), Some(b)) => Self::haversine_km(a, b).min(MAX_DISTANCE),
            _ => self.fallback.distance(from, to),
        }
    }
}
