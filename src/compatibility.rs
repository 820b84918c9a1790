//! Time compatibility between a client's schedule and an employee.
//!
//! The search is first-fit: days in the client's schedule order, slots in
//! list order, and the first slot clearing every rule wins. Remaining
//! candidates are never evaluated.

use chrono::{NaiveTime, Timelike, Weekday};
use tracing::debug;

use crate::error::ParseError;
use crate::model::{CommittedSlot, Intervention, MEAL_PREPARATION, WeeklySchedule};
use crate::time::{minutes_between, parse_clock, parse_slot_start};

/// Spacing rules applied to candidate slots.
#[derive(Debug, Clone)]
pub struct SlotRules {
    /// Minimum distance (minutes) between a slot start and any intervention.
    pub intervention_gap_minutes: i64,
    /// Minimum distance (minutes) between two starts for the same employee on
    /// the same day, before the employee's key time is added.
    pub base_gap_minutes: i64,
    /// Meal preparation may not start before this hour.
    pub meal_earliest_start_hour: u32,
}

impl Default for SlotRules {
    fn default() -> Self {
        Self {
            intervention_gap_minutes: 60,
            base_gap_minutes: 60,
            meal_earliest_start_hour: 10,
        }
    }
}

/// The employee-side inputs of a compatibility search.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeSlots<'a> {
    pub availability: &'a WeeklySchedule,
    pub committed: &'a [CommittedSlot],
    pub key_time_minutes: i64,
}

/// A (day, slot) pair both sides can work with.
///
/// Only the slot start is validated here; the end of `slot` is checked by
/// whoever consumes the full range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotMatch {
    pub day: Weekday,
    /// Slot token as it appears in the client's schedule.
    pub slot: String,
    pub start: NaiveTime,
}

impl SlotMatch {
    pub fn committed(&self) -> CommittedSlot {
        CommittedSlot {
            day: self.day,
            start: self.start,
        }
    }
}

/// Find the first (day, slot) of `client_schedule` compatible with the
/// employee.
///
/// Days the employee has no availability entry for are skipped. A slot is
/// rejected if it is a meal preparation starting too early, starts too close
/// to an intervention, or starts too close to one of the employee's
/// committed slots on the same day. Slots whose start fails to parse are
/// skipped.
pub fn find_compatible_slot(
    client_schedule: &WeeklySchedule,
    employee: EmployeeSlots<'_>,
    task: &str,
    interventions: &[Intervention],
    rules: &SlotRules,
) -> Option<SlotMatch> {
    for entry in client_schedule.days() {
        if !employee.availability.contains_day(entry.day) {
            debug!(day = %entry.day, "day not available for employee");
            continue;
        }

        for slot in &entry.slots {
            match check_slot(entry.day, slot, employee, task, interventions, rules) {
                Ok(Some(start)) => {
                    debug!(day = %entry.day, slot = slot.as_str(), "compatible slot found");
                    return Some(SlotMatch {
                        day: entry.day,
                        slot: slot.clone(),
                        start,
                    });
                }
                Ok(None) => {}
                Err(err) => {
                    debug!(day = %entry.day, slot = slot.as_str(), error = %err, "slot skipped");
                }
            }
        }
    }

    None
}

/// Start of `slot` if it clears every rule, `None` if a rule rejects it.
fn check_slot(
    day: Weekday,
    slot: &str,
    employee: EmployeeSlots<'_>,
    task: &str,
    interventions: &[Intervention],
    rules: &SlotRules,
) -> Result<Option<NaiveTime>, ParseError> {
    let start = parse_slot_start(slot)?;

    if task == MEAL_PREPARATION && start.hour() < rules.meal_earliest_start_hour {
        debug!(%day, slot, "rejected: meal preparation too early");
        return Ok(None);
    }

    for intervention in interventions {
        let time = parse_clock(&intervention.time)?;
        if minutes_between(start, time) < rules.intervention_gap_minutes {
            debug!(%day, slot, intervention = intervention.time.as_str(), "rejected: intervention");
            return Ok(None);
        }
    }

    let min_gap = rules.base_gap_minutes + employee.key_time_minutes;
    for committed in employee.committed.iter().filter(|c| c.day == day) {
        if minutes_between(start, committed.start) < min_gap {
            debug!(%day, slot, committed = %committed.start, "rejected: committed slot");
            return Ok(None);
        }
    }

    Ok(Some(start))
}
