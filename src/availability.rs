//! Employee unavailability: vacations, leaves and trainings.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::ParseError;
use crate::model::Employee;
use crate::time::{TimeRange, parse_clock, parse_date};

/// Why an employee cannot take a visit on a given date and slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unavailability {
    Vacation { start: NaiveDate, end: NaiveDate },
    Leave { start: NaiveDate, end: NaiveDate },
    Training { date: NaiveDate, range: TimeRange },
}

/// Check an employee's calendar for `date` and the `slot` token.
///
/// Vacations are checked first, then leaves (both inclusive on either end),
/// then trainings on the same date whose time range overlaps the slot.
/// Returns `Ok(None)` when nothing blocks the employee.
///
/// A malformed slot or calendar record encountered before a blocking entry
/// is an error; records after the first blocking entry are not inspected.
pub fn check_unavailability(
    employee: &Employee,
    date: NaiveDate,
    slot: &str,
) -> Result<Option<Unavailability>, ParseError> {
    let requested = TimeRange::parse(slot)?;

    for vacation in &employee.vacations {
        let start = parse_date(&vacation.start)?;
        let end = parse_date(&vacation.end)?;
        if start <= date && date <= end {
            return Ok(Some(Unavailability::Vacation { start, end }));
        }
    }

    for leave in &employee.leaves {
        let start = parse_date(&leave.start)?;
        let end = parse_date(&leave.end)?;
        if start <= date && date <= end {
            return Ok(Some(Unavailability::Leave { start, end }));
        }
    }

    for training in &employee.trainings {
        let training_date = parse_date(&training.date)?;
        if training_date != date {
            continue;
        }
        let range = TimeRange::new(
            parse_clock(&training.start_time)?,
            parse_clock(&training.end_time)?,
        );
        if requested.overlaps(&range) {
            return Ok(Some(Unavailability::Training {
                date: training_date,
                range,
            }));
        }
    }

    Ok(None)
}

/// Whether the employee can take the slot on `date`.
///
/// Fails closed: any parse error makes the employee unavailable.
pub fn is_employee_available(employee: &Employee, date: NaiveDate, slot: &str) -> bool {
    match check_unavailability(employee, date, slot) {
        Ok(None) => true,
        Ok(Some(reason)) => {
            debug!(employee = employee.id, %date, slot, ?reason, "employee unavailable");
            false
        }
        Err(err) => {
            warn!(
                employee = employee.id,
                %date,
                slot,
                error = %err,
                "availability check failed, treating as unavailable"
            );
            false
        }
    }
}
