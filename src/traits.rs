//! Seams between the planner and its pluggable collaborators.

use crate::model::Location;

/// Upper bound of any [`DistanceEstimator`] value.
pub const MAX_DISTANCE: f64 = 99.0;

/// Bounded proximity between two locations.
///
/// Implementations must be symmetric and return a value in
/// `[0, MAX_DISTANCE]`. Callers only compare values, so the unit is up to the
/// implementation (hash buckets, kilometres, driving minutes).
pub trait DistanceEstimator: Send + Sync {
    fn distance(&self, from: &Location, to: &Location) -> f64;
}
