//! The visit plan produced by a run.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{ClientId, EmployeeId};

/// One committed visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub client_id: ClientId,
    pub employee_id: EmployeeId,
    pub datetime: NaiveDateTime,
    pub task: String,
    /// Hours.
    pub duration: f64,
}

/// Append-only sequence of assignments, in commit order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    assignments: Vec<Assignment>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_assignment(
        &mut self,
        client_id: ClientId,
        employee_id: EmployeeId,
        datetime: NaiveDateTime,
        task: impl Into<String>,
        duration: f64,
    ) {
        self.assignments.push(Assignment {
            client_id,
            employee_id,
            datetime,
            task: task.into(),
            duration,
        });
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Summed assignment hours for each of `employee_ids`.
    ///
    /// Every given id is present (0.0 when it has no assignment); ids not
    /// given are left out even if they carry assignments.
    pub fn employee_hours(&self, employee_ids: &[EmployeeId]) -> BTreeMap<EmployeeId, f64> {
        let mut hours: BTreeMap<EmployeeId, f64> =
            employee_ids.iter().map(|id| (*id, 0.0)).collect();
        for assignment in &self.assignments {
            if let Some(total) = hours.get_mut(&assignment.employee_id) {
                *total += assignment.duration;
            }
        }
        hours
    }

    /// Snapshot of the plan in its output shape.
    pub fn export(&self, employee_ids: &[EmployeeId]) -> PlanExport {
        PlanExport {
            assignments: self.assignments.clone(),
            employee_hours: self.employee_hours(employee_ids),
        }
    }
}

/// Output document: `{ "assignments": [...], "employee_hours": {"1": 2.0} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanExport {
    pub assignments: Vec<Assignment>,
    pub employee_hours: BTreeMap<EmployeeId, f64>,
}

impl PlanExport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
