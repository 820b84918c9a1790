//! OSRM HTTP adapter for driving distances.

use serde::Deserialize;
use tracing::debug;

use crate::haversine::HaversineDistance;
use crate::model::Location;
use crate::traits::{DistanceEstimator, MAX_DISTANCE};

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "car".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Driving minutes between two locations, capped at [`MAX_DISTANCE`].
///
/// Requests that fail, and locations without coordinates, fall back to
/// [`HaversineDistance`].
#[derive(Debug, Clone)]
pub struct OsrmDistance {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
    fallback: HaversineDistance,
}

impl OsrmDistance {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            client,
            fallback: HaversineDistance::new(),
        })
    }

    fn route_url(&self, from: (f64, f64), to: (f64, f64)) -> String {
        format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=false",
            self.config.base_url, self.config.profile, from.1, from.0, to.1, to.0
        )
    }

    fn driving_minutes(&self, from: (f64, f64), to: (f64, f64)) -> Result<f64, reqwest::Error> {
        let body = self
            .client
            .get(self.route_url(from, to))
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmRouteResponse>())?;

        Ok(body
            .routes
            .first()
            .map(|route| route.duration / 60.0)
            .unwrap_or(MAX_DISTANCE))
    }
}

impl DistanceEstimator for OsrmDistance {
    fn distance(&self, from: &Location, to: &Location) -> f64 {
        let (Some(a), Some(b)) = (from.coordinates, to.coordinates) else {
            return self.fallback.distance(from, to);
        };

        // Route durations are not exactly symmetric; order the endpoints.
        let (a, b) = if (a.0, a.1) <= (b.0, b.1) { (a, b) } else { (b, a) };

        match self.driving_minutes(a, b) {
            Ok(minutes) => minutes.clamp(0.0, MAX_DISTANCE),
            Err(err) => {
                debug!(error = %err, "osrm route failed, using haversine");
                self.fallback.distance(from, to)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// Seconds.
    duration: f64,
}
