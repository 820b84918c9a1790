//! Greedy per-client assignment of visits to employees.
//!
//! Clients are processed strictly in input order; for each one every employee
//! is evaluated (eligibility, time compatibility, unavailability, score) and
//! the lowest-cost candidate is committed. Earlier decisions are never
//! revisited, so the same inputs in another client order can yield another
//! plan.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::availability::is_employee_available;
use crate::compatibility::{EmployeeSlots, SlotMatch, SlotRules, find_compatible_slot};
use crate::eligibility::check_eligibility;
use crate::model::{Client, ClientId, CommittedSlots, Employee, EmployeeId, Intervention};
use crate::plan::Plan;
use crate::scoring::{Score, score};
use crate::time::slot_duration;
use crate::traits::DistanceEstimator;

#[derive(Debug, Clone)]
pub struct PlannerOptions {
    /// Monday of the week the weekly schedules are projected onto.
    pub reference_monday: NaiveDate,
    pub slot_rules: SlotRules,
    /// Evaluate employees for a client on the rayon pool. The chosen
    /// candidate is identical to a sequential scan.
    pub parallel_employee_scan: bool,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            reference_monday: NaiveDate::from_ymd_opt(2025, 4, 14).unwrap_or_default(),
            slot_rules: SlotRules::default(),
            parallel_employee_scan: false,
        }
    }
}

impl PlannerOptions {
    /// Calendar date of `day` in the reference week.
    ///
    /// Every weekday gets its own date (Monday 2025-04-14 through Sunday
    /// 2025-04-20 by default). This differs from the two-date mapping some
    /// existing agency tools use, where Monday is 2025-04-14 and every other
    /// day is 2025-04-15.
    pub fn date_for(&self, day: Weekday) -> NaiveDate {
        let offset = self.reference_monday.weekday().num_days_from_monday() as i64;
        let monday = self.reference_monday - chrono::Duration::days(offset);
        monday + chrono::Duration::days(day.num_days_from_monday() as i64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnassignedReason {
    /// No employee passed eligibility.
    NoEligibleEmployee,
    /// Eligible employees exist but none had a compatible slot.
    NoCompatibleSlot,
    /// Some employee had a compatible slot but was on vacation, leave or
    /// training at that time.
    EmployeeUnavailable,
}

#[derive(Debug, Clone)]
pub struct UnassignedClient {
    pub client_id: ClientId,
    pub reason: UnassignedReason,
}

#[derive(Debug, Clone)]
pub struct PlanningOutcome {
    pub plan: Plan,
    pub unassigned: Vec<UnassignedClient>,
    /// Slots committed per employee during the run, in commit order.
    pub committed: CommittedSlots,
}

impl PlanningOutcome {
    pub fn unassigned_ids(&self) -> Vec<ClientId> {
        self.unassigned.iter().map(|u| u.client_id).collect()
    }
}

/// Furthest stage an employee reached for a client. The highest stage over
/// all employees explains an unassigned client. Ineligibility reasons are
/// logged where they occur.
#[derive(Debug, Clone)]
enum Rejection {
    Ineligible,
    NoCompatibleSlot,
    Unavailable,
}

impl Rejection {
    fn stage(&self) -> u8 {
        match self {
            Rejection::Ineligible => 0,
            Rejection::NoCompatibleSlot => 1,
            Rejection::Unavailable => 2,
        }
    }
}

#[derive(Debug, Clone)]
struct Candidate<'a> {
    employee: &'a Employee,
    slot: SlotMatch,
    score: Score,
}

/// Build the visit plan for `clients`.
pub fn generate_plan<D>(
    clients: &[Client],
    employees: &[Employee],
    interventions: &[Intervention],
    distance: &D,
    options: &PlannerOptions,
) -> PlanningOutcome
where
    D: DistanceEstimator + ?Sized,
{
    info!(clients = clients.len(), employees = employees.len(), "planning started");

    let mut plan = Plan::new();
    let mut committed = CommittedSlots::new();
    let mut unassigned = Vec::new();

    for client in clients {
        debug!(client = client.id, "processing client");

        let evaluate_one =
            |employee| evaluate(client, employee, interventions, &committed, distance, options);
        let evaluations: Vec<Result<Candidate<'_>, Rejection>> =
            if options.parallel_employee_scan {
                employees.par_iter().map(evaluate_one).collect()
            } else {
                employees.iter().map(evaluate_one).collect()
            };

        let mut best: Option<Candidate<'_>> = None;
        let mut furthest: Option<Rejection> = None;
        for evaluation in evaluations {
            match evaluation {
                Ok(candidate) => {
                    let better = best
                        .as_ref()
                        .is_none_or(|current| candidate.score.value < current.score.value);
                    if better {
                        best = Some(candidate);
                    }
                }
                Err(rejection) => {
                    if furthest.as_ref().is_none_or(|f| rejection.stage() > f.stage()) {
                        furthest = Some(rejection);
                    }
                }
            }
        }

        match best {
            Some(candidate) => {
                let date = options.date_for(candidate.slot.day);
                let datetime = NaiveDateTime::new(date, candidate.slot.start);
                let duration = slot_duration(&candidate.slot.slot);

                plan.add_assignment(
                    client.id,
                    candidate.employee.id,
                    datetime,
                    client.service_type.clone(),
                    duration,
                );
                committed.commit(candidate.employee.id, candidate.slot.committed());

                info!(
                    client = client.id,
                    employee = candidate.employee.id,
                    %datetime,
                    duration,
                    score = candidate.score.value,
                    "assignment committed"
                );
            }
            None => {
                let reason = match furthest {
                    Some(Rejection::Unavailable) => UnassignedReason::EmployeeUnavailable,
                    Some(Rejection::NoCompatibleSlot) => UnassignedReason::NoCompatibleSlot,
                    Some(Rejection::Ineligible) | None => UnassignedReason::NoEligibleEmployee,
                };
                debug!(client = client.id, ?reason, "client unassigned");
                unassigned.push(UnassignedClient {
                    client_id: client.id,
                    reason,
                });
            }
        }
    }

    let outcome = PlanningOutcome {
        plan,
        unassigned,
        committed,
    };

    if !outcome.unassigned.is_empty() {
        warn!(clients = ?outcome.unassigned_ids(), "clients left without a visit");
    }
    info!(
        assignments = outcome.plan.len(),
        unassigned = outcome.unassigned.len(),
        "planning finished"
    );

    outcome
}

fn evaluate<'a, D>(
    client: &Client,
    employee: &'a Employee,
    interventions: &[Intervention],
    committed: &CommittedSlots,
    distance: &D,
    options: &PlannerOptions,
) -> Result<Candidate<'a>, Rejection>
where
    D: DistanceEstimator + ?Sized,
{
    if let Err(reason) = check_eligibility(client, employee) {
        debug!(client = client.id, employee = employee.id, ?reason, "employee ineligible");
        return Err(Rejection::Ineligible);
    }

    let employee_slots = EmployeeSlots {
        availability: &employee.availability,
        committed: committed.for_employee(employee.id),
        key_time_minutes: employee.key_time_minutes,
    };
    let Some(slot) = find_compatible_slot(
        &client.schedule,
        employee_slots,
        &client.service_type,
        interventions,
        &options.slot_rules,
    ) else {
        debug!(client = client.id, employee = employee.id, "no compatible slot");
        return Err(Rejection::NoCompatibleSlot);
    };

    let date = options.date_for(slot.day);
    if !is_employee_available(employee, date, &slot.slot) {
        return Err(Rejection::Unavailable);
    }

    let distance = distance.distance(&client.location, &employee.location);
    let cost = score(client, employee, distance, committed.count(employee.id));
    debug!(
        client = client.id,
        employee = employee.id,
        distance,
        affinity = cost.affinity,
        qualification_bonus = cost.qualification_bonus,
        workload_penalty = cost.workload_penalty,
        score = cost.value,
        "candidate scored"
    );

    Ok(Candidate {
        employee,
        slot,
        score: cost,
    })
}

/// Ids of `employees`, in order, for [`Plan::employee_hours`].
pub fn employee_ids(employees: &[Employee]) -> Vec<EmployeeId> {
    employees.iter().map(|e| e.id).collect()
}
