//! Input records for a planning run.
//!
//! Clients, employees and interventions are built by an external loader and
//! are read-only for the duration of a run. The only per-run mutable state,
//! each employee's committed slots, lives in [`CommittedSlots`] and is owned
//! by the solver.

use std::collections::HashMap;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

pub type ClientId = u32;
pub type EmployeeId = u32;

/// Need and service type that gets the earliest-start rule and cooking bonus.
pub const MEAL_PREPARATION: &str = "meal_preparation";
pub const CLEANING: &str = "cleaning";
pub const PERSONAL_CARE: &str = "personal_care";
pub const GROCERIES: &str = "groceries";
pub const APPOINTMENT_TRANSPORT: &str = "appointment_transport";

pub const COOKING: &str = "cooking";
pub const CAREGIVER: &str = "caregiver";
pub const HOUSEKEEPING: &str = "housekeeping";

/// Where a client lives or an employee starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub zip: String,
    /// (lat, lng), when known.
    #[serde(default)]
    pub coordinates: Option<(f64, f64)>,
}

impl Location {
    pub fn new(city: impl Into<String>, zip: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            zip: zip.into(),
            coordinates: None,
        }
    }

    pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.coordinates = Some((lat, lng));
        self
    }

    /// Textual identity used by distance providers that ignore geography.
    pub fn key(&self) -> String {
        format!("{}/{}", self.city, self.zip)
    }
}

/// Slot tokens for one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySlots {
    pub day: Weekday,
    pub slots: Vec<String>,
}

/// Weekly pattern of "HH:MM-HH:MM" slot tokens, keyed by weekday.
///
/// Day order is the insertion order and is significant: the time
/// compatibility search walks days in this order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule {
    days: Vec<DaySlots>,
}

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append slots for a day. Slots for a day already present are appended
    /// to that day's list.
    pub fn day<I, S>(mut self, day: Weekday, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots = slots.into_iter().map(Into::into);
        match self.days.iter_mut().find(|entry| entry.day == day) {
            Some(entry) => entry.slots.extend(slots),
            None => self.days.push(DaySlots {
                day,
                slots: slots.collect(),
            }),
        }
        self
    }

    pub fn days(&self) -> &[DaySlots] {
        &self.days
    }

    pub fn contains_day(&self, day: Weekday) -> bool {
        self.days.iter().any(|entry| entry.day == day)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// How an employee travels between visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    Car,
    Public,
    Bicycle,
    Walking,
}

/// Inclusive range of "YYYY-MM-DD" dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// A training session blocking part of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Training {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl Training {
    pub fn new(
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

/// A third-party visit (nurse, doctor, ...) that new assignments must keep
/// clear of. Not tied to any employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intervention {
    /// "HH:MM" clock time.
    pub time: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Intervention {
    pub fn new(time: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            kind: kind.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub location: Location,
    pub needs: Vec<String>,
    /// Requested visit slots.
    pub schedule: WeeklySchedule,
    /// Funding body tag (opaque).
    pub funding: String,
    /// When the client can receive visits at all.
    pub availability: WeeklySchedule,
    pub accept_new_employee: bool,
    pub service_type: String,
    pub prefer_known_employee: bool,
    /// Preferred employees.
    pub affinity: Vec<EmployeeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub location: Location,
    pub weekly_hours: f64,
    pub qualifications: Vec<String>,
    pub availability: WeeklySchedule,
    /// Clients regularly served before this run.
    pub clients_assigned: Vec<ClientId>,
    pub transport: Transport,
    /// Carried, not consulted by any rule.
    pub work_schedule: WeeklySchedule,
    pub vacations: Vec<DateRange>,
    pub leaves: Vec<DateRange>,
    pub trainings: Vec<Training>,
    /// Recognised disability status. Carried, not consulted by any rule.
    pub disability_status: bool,
    /// Extra minutes of spacing required around this employee's visits.
    pub key_time_minutes: i64,
    pub known_clients: Vec<ClientId>,
    /// Preferred clients.
    pub affinity: Vec<ClientId>,
    /// Carried, not enforced.
    pub max_days_per_week: u8,
}

impl Employee {
    pub fn has_qualification(&self, tag: &str) -> bool {
        self.qualifications.iter().any(|q| q == tag)
    }

    pub fn knows_client(&self, client_id: ClientId) -> bool {
        self.known_clients.contains(&client_id)
    }
}

/// Start of one slot an employee has been committed to during the current
/// run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommittedSlot {
    pub day: Weekday,
    pub start: NaiveTime,
}

/// Run-scoped record of each employee's committed slots, in commit order.
#[derive(Debug, Clone, Default)]
pub struct CommittedSlots {
    by_employee: HashMap<EmployeeId, Vec<CommittedSlot>>,
}

impl CommittedSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_employee(&self, employee_id: EmployeeId) -> &[CommittedSlot] {
        self.by_employee
            .get(&employee_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn count(&self, employee_id: EmployeeId) -> usize {
        self.for_employee(employee_id).len()
    }

    pub fn commit(&mut self, employee_id: EmployeeId, slot: CommittedSlot) {
        self.by_employee.entry(employee_id).or_default().push(slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_schedule_keeps_insertion_order() {
        let schedule = WeeklySchedule::new()
            .day(Weekday::Tue, ["12:00-13:00"])
            .day(Weekday::Mon, ["09:00-10:00"])
            .day(Weekday::Tue, ["15:00-16:00"]);

        let days: Vec<Weekday> = schedule.days().iter().map(|d| d.day).collect();
        assert_eq!(days, vec![Weekday::Tue, Weekday::Mon]);
        assert_eq!(schedule.days()[0].slots, vec!["12:00-13:00", "15:00-16:00"]);
        assert!(schedule.contains_day(Weekday::Mon));
        assert!(!schedule.contains_day(Weekday::Fri));
    }

    #[test]
    fn test_committed_slots_default_empty() {
        let mut committed = CommittedSlots::new();
        assert!(committed.for_employee(7).is_empty());

        let slot = CommittedSlot {
            day: Weekday::Mon,
            start: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        };
        committed.commit(7, slot);
        assert_eq!(committed.count(7), 1);
        assert_eq!(committed.for_employee(7)[0], slot);
        assert_eq!(committed.count(8), 0);
    }

    #[test]
    fn test_intervention_deserializes_type_field() {
        let json = r#"{"time": "08:00", "type": "nurse"}"#;
        let intervention: Intervention = serde_json::from_str(json).unwrap();
        assert_eq!(intervention, Intervention::new("08:00", "nurse"));
    }

    #[test]
    fn test_location_key() {
        assert_eq!(Location::new("Paris", "75001").key(), "Paris/75001");
    }
}
