//! Eligibility of an employee for a client: relationship, transport and
//! qualification gating.

use crate::model::{
    APPOINTMENT_TRANSPORT, CAREGIVER, CLEANING, COOKING, Client, Employee, GROCERIES,
    HOUSEKEEPING, MEAL_PREPARATION, PERSONAL_CARE, Transport,
};

/// Needs that can only be served with a car.
const CAR_NEEDS: &[&str] = &[GROCERIES, APPOINTMENT_TRANSPORT];

/// Qualification tags accepted for each known need.
const COMPATIBLE_QUALIFICATIONS: &[(&str, &[&str])] = &[
    (MEAL_PREPARATION, &[COOKING, CAREGIVER]),
    (CLEANING, &[HOUSEKEEPING]),
    (PERSONAL_CARE, &[CAREGIVER]),
    (GROCERIES, &[CAREGIVER]),
    (APPOINTMENT_TRANSPORT, &[CAREGIVER]),
];

/// Why an employee cannot serve a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ineligible {
    /// Client refuses unfamiliar staff and does not know this employee.
    RefusesNewEmployee,
    /// A need requires a car and the employee has none.
    TransportRequired,
    /// The employee holds no acceptable qualification for this need.
    MissingQualification(String),
}

/// Qualification tags that satisfy `need`.
///
/// Needs outside the table require a tag with the same name.
pub fn acceptable_qualifications(need: &str) -> Vec<&str> {
    match COMPATIBLE_QUALIFICATIONS.iter().find(|(known, _)| *known == need) {
        Some((_, tags)) => tags.to_vec(),
        None => vec![need],
    }
}

pub fn requires_car(client: &Client) -> bool {
    client.needs.iter().any(|need| CAR_NEEDS.contains(&need.as_str()))
}

/// Check the rules in order, stopping at the first failure.
pub fn check_eligibility(client: &Client, employee: &Employee) -> Result<(), Ineligible> {
    if !client.accept_new_employee && !employee.knows_client(client.id) {
        return Err(Ineligible::RefusesNewEmployee);
    }

    if requires_car(client) && employee.transport != Transport::Car {
        return Err(Ineligible::TransportRequired);
    }

    for need in &client.needs {
        let accepted = acceptable_qualifications(need);
        if !accepted.iter().any(|tag| employee.has_qualification(tag)) {
            return Err(Ineligible::MissingQualification(need.clone()));
        }
    }

    Ok(())
}

pub fn is_eligible(client: &Client, employee: &Employee) -> bool {
    check_eligibility(client, employee).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Location, WeeklySchedule};

    fn client(needs: &[&str]) -> Client {
        Client {
            id: 1,
            location: Location::new("Paris", "75001"),
            needs: needs.iter().map(|n| n.to_string()).collect(),
            schedule: WeeklySchedule::new(),
            funding: "APA".to_string(),
            availability: WeeklySchedule::new(),
            accept_new_employee: true,
            service_type: needs.first().map(|n| n.to_string()).unwrap_or_default(),
            prefer_known_employee: false,
            affinity: Vec::new(),
        }
    }

    fn employee(qualifications: &[&str], transport: Transport) -> Employee {
        Employee {
            id: 10,
            location: Location::new("Paris", "75002"),
            weekly_hours: 35.0,
            qualifications: qualifications.iter().map(|q| q.to_string()).collect(),
            availability: WeeklySchedule::new(),
            clients_assigned: Vec::new(),
            transport,
            work_schedule: WeeklySchedule::new(),
            vacations: Vec::new(),
            leaves: Vec::new(),
            trainings: Vec::new(),
            disability_status: false,
            key_time_minutes: 0,
            known_clients: Vec::new(),
            affinity: Vec::new(),
            max_days_per_week: 5,
        }
    }

    #[test]
    fn test_qualified_employee_eligible() {
        let meal = client(&[MEAL_PREPARATION]);
        assert!(is_eligible(&meal, &employee(&[COOKING], Transport::Public)));
        assert!(is_eligible(&meal, &employee(&[CAREGIVER], Transport::Public)));
        assert!(is_eligible(&client(&[CLEANING]), &employee(&[HOUSEKEEPING], Transport::Walking)));
    }

    #[test]
    fn test_refuses_new_employee() {
        let mut c = client(&[CLEANING]);
        c.accept_new_employee = false;
        let mut e = employee(&[HOUSEKEEPING], Transport::Car);

        assert_eq!(check_eligibility(&c, &e), Err(Ineligible::RefusesNewEmployee));
        e.known_clients.push(c.id);
        assert_eq!(check_eligibility(&c, &e), Ok(()));
    }

    #[test]
    fn test_car_required_for_groceries_and_transport() {
        let e = employee(&[CAREGIVER], Transport::Public);
        assert_eq!(
            check_eligibility(&client(&[PERSONAL_CARE, GROCERIES]), &e),
            Err(Ineligible::TransportRequired)
        );
        assert_eq!(
            check_eligibility(&client(&[APPOINTMENT_TRANSPORT]), &e),
            Err(Ineligible::TransportRequired)
        );
        assert!(is_eligible(&client(&[GROCERIES]), &employee(&[CAREGIVER], Transport::Car)));
    }

    #[test]
    fn test_relationship_checked_before_transport() {
        let mut c = client(&[GROCERIES]);
        c.accept_new_employee = false;
        assert_eq!(
            check_eligibility(&c, &employee(&[CAREGIVER], Transport::Bicycle)),
            Err(Ineligible::RefusesNewEmployee)
        );
    }

    #[test]
    fn test_every_need_must_be_covered() {
        let e = employee(&[HOUSEKEEPING], Transport::Car);
        assert_eq!(
            check_eligibility(&client(&[CLEANING, PERSONAL_CARE]), &e),
            Err(Ineligible::MissingQualification(PERSONAL_CARE.to_string()))
        );
    }

    #[test]
    fn test_unknown_need_requires_same_tag() {
        assert_eq!(acceptable_qualifications("gardening"), vec!["gardening"]);
        assert!(!is_eligible(&client(&["gardening"]), &employee(&[CAREGIVER], Transport::Car)));
        assert!(is_eligible(&client(&["gardening"]), &employee(&["gardening"], Transport::Car)));
    }

    #[test]
    fn test_no_needs_is_eligible() {
        assert!(is_eligible(&client(&[]), &employee(&[], Transport::Walking)));
    }
}
