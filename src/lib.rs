//! care-planner core
//!
//! Greedy assignment of care visits (clients) to caregivers (employees),
//! producing a non-overlapping daily visit plan.

pub mod error;
pub mod model;
pub mod time;
pub mod traits;
pub mod distance;
pub mod haversine;
pub mod osrm;
pub mod availability;
pub mod compatibility;
pub mod eligibility;
pub mod scoring;
pub mod plan;
pub mod solver;
