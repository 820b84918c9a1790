//! Test fixtures for care-planner.
//!
//! Builders for clients and employees with sensible defaults, and a
//! predictable distance provider.

#![allow(dead_code)]

use chrono::Weekday;

use care_planner::model::{
    Client, DateRange, Employee, Location, Training, Transport, WeeklySchedule,
};
use care_planner::traits::{DistanceEstimator, MAX_DISTANCE};

/// Builder for test clients.
#[derive(Clone, Debug)]
pub struct TestClient(Client);

impl TestClient {
    pub fn new(id: u32) -> Self {
        Self(Client {
            id,
            location: Location::new("Paris", "75000"),
            needs: Vec::new(),
            schedule: WeeklySchedule::new(),
            funding: "APA".to_string(),
            availability: WeeklySchedule::new()
                .day(Weekday::Mon, ["08:00-20:00"])
                .day(Weekday::Tue, ["08:00-20:00"]),
            accept_new_employee: true,
            service_type: String::new(),
            prefer_known_employee: false,
            affinity: Vec::new(),
        })
    }

    /// Adds a need; the first need also becomes the service type.
    pub fn needs(mut self, need: &str) -> Self {
        if self.0.needs.is_empty() {
            self.0.service_type = need.to_string();
        }
        self.0.needs.push(need.to_string());
        self
    }

    pub fn service_type(mut self, service_type: &str) -> Self {
        self.0.service_type = service_type.to_string();
        self
    }

    pub fn slot(mut self, day: Weekday, slot: &str) -> Self {
        self.0.schedule = self.0.schedule.day(day, [slot]);
        self
    }

    pub fn zip(mut self, zip: &str) -> Self {
        self.0.location = Location::new("Paris", zip);
        self
    }

    pub fn known_staff_only(mut self) -> Self {
        self.0.accept_new_employee = false;
        self.0.prefer_known_employee = true;
        self
    }

    pub fn prefers(mut self, employee_id: u32) -> Self {
        self.0.affinity.push(employee_id);
        self
    }

    pub fn build(self) -> Client {
        self.0
    }
}

/// Builder for test employees. Defaults: car, Monday and Tuesday
/// availability, no qualifications, no key time.
#[derive(Clone, Debug)]
pub struct TestEmployee(Employee);

impl TestEmployee {
    pub fn new(id: u32) -> Self {
        Self(Employee {
            id,
            location: Location::new("Paris", "75000"),
            weekly_hours: 35.0,
            qualifications: Vec::new(),
            availability: WeeklySchedule::new()
                .day(Weekday::Mon, ["08:00-18:00"])
                .day(Weekday::Tue, ["08:00-18:00"]),
            clients_assigned: Vec::new(),
            transport: Transport::Car,
            work_schedule: WeeklySchedule::new(),
            vacations: Vec::new(),
            leaves: Vec::new(),
            trainings: Vec::new(),
            disability_status: false,
            key_time_minutes: 0,
            known_clients: Vec::new(),
            affinity: Vec::new(),
            max_days_per_week: 5,
        })
    }

    pub fn qualification(mut self, tag: &str) -> Self {
        self.0.qualifications.push(tag.to_string());
        self
    }

    pub fn transport(mut self, transport: Transport) -> Self {
        self.0.transport = transport;
        self
    }

    pub fn zip(mut self, zip: &str) -> Self {
        self.0.location = Location::new("Paris", zip);
        self
    }

    pub fn available(mut self, days: &[Weekday]) -> Self {
        self.0.availability = days
            .iter()
            .fold(WeeklySchedule::new(), |schedule, day| schedule.day(*day, ["08:00-18:00"]));
        self
    }

    pub fn key_time(mut self, minutes: i64) -> Self {
        self.0.key_time_minutes = minutes;
        self
    }

    pub fn knows(mut self, client_id: u32) -> Self {
        self.0.known_clients.push(client_id);
        self.0.clients_assigned.push(client_id);
        self
    }

    pub fn prefers(mut self, client_id: u32) -> Self {
        self.0.affinity.push(client_id);
        self
    }

    pub fn vacation(mut self, start: &str, end: &str) -> Self {
        self.0.vacations.push(DateRange::new(start, end));
        self
    }

    pub fn leave(mut self, start: &str, end: &str) -> Self {
        self.0.leaves.push(DateRange::new(start, end));
        self
    }

    pub fn training(mut self, date: &str, start: &str, end: &str) -> Self {
        self.0.trainings.push(Training::new(date, start, end));
        self
    }

    pub fn build(self) -> Employee {
        self.0
    }
}

/// Absolute difference of numeric zip codes (simple, predictable).
pub struct ZipDistance;

impl DistanceEstimator for ZipDistance {
    fn distance(&self, from: &Location, to: &Location) -> f64 {
        let a: f64 = from.zip.parse().unwrap_or(0.0);
        let b: f64 = to.zip.parse().unwrap_or(0.0);
        (a - b).abs().min(MAX_DISTANCE)
    }
}
