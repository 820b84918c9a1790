//! Candidate cost. Lower is better.

use crate::model::{COOKING, Client, Employee, MEAL_PREPARATION};

/// Divisor applied to distance when client and employee share an affinity.
pub const AFFINITY_DIVISOR: f64 = 10.0;
/// Multiplier applied to distance otherwise.
pub const NO_AFFINITY_MULTIPLIER: f64 = 2.0;
/// Multiplier for a cook on a meal-preparation service.
pub const COOKING_BONUS: f64 = 0.25;
/// Extra cost per slot already committed to the employee this run.
pub const WORKLOAD_STEP: f64 = 0.1;

/// Breakdown of a candidate's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub distance: f64,
    pub affinity: bool,
    pub qualification_bonus: f64,
    pub workload_penalty: f64,
    pub value: f64,
}

/// Whether either side prefers the other.
pub fn has_affinity(client: &Client, employee: &Employee) -> bool {
    client.affinity.contains(&employee.id) || employee.affinity.contains(&client.id)
}

pub fn qualification_bonus(client: &Client, employee: &Employee) -> f64 {
    if employee.has_qualification(COOKING) && client.service_type == MEAL_PREPARATION {
        COOKING_BONUS
    } else {
        1.0
    }
}

pub fn workload_penalty(committed_count: usize) -> f64 {
    1.0 + WORKLOAD_STEP * committed_count as f64
}

/// Combine distance, affinity, qualification fit and workload.
pub fn score(client: &Client, employee: &Employee, distance: f64, committed_count: usize) -> Score {
    let affinity = has_affinity(client, employee);
    let qualification_bonus = qualification_bonus(client, employee);
    let workload_penalty = workload_penalty(committed_count);

    let weighted = if affinity {
        distance / AFFINITY_DIVISOR
    } else {
        distance * NO_AFFINITY_MULTIPLIER
    };

    Score {
        distance,
        affinity,
        qualification_bonus,
        workload_penalty,
        value: weighted * qualification_bonus * workload_penalty,
    }
}
