//! Aggregate income and usage reporting

use serde::Serialize;

use crate::model::Reservation;

/// Returned by [`top_rented_car`] when there are no reservations
pub const NO_DATA: &str = "No Data";

/// Sum of frozen charges over every reservation
pub fn total_revenue(reservations: &[Reservation]) -> f64 {
    reservations.iter().map(|r| r.total_charge).sum()
}

/// Most frequently reserved plate, if any
///
/// Among plates with the same count, the one that first appears in the
/// ledger wins.
pub fn top_rented_plate(reservations: &[Reservation]) -> Option<&str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for r in reservations {
        match counts.iter_mut().find(|(plate, _)| *plate == r.plate) {
            Some((_, count)) => *count += 1,
            None => counts.push((r.plate.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (plate, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((plate, count));
        }
    }
    best.map(|(plate, _)| plate)
}

/// Most frequently reserved plate, or [`NO_DATA`]
pub fn top_rented_car(reservations: &[Reservation]) -> String {
    top_rented_plate(reservations)
        .unwrap_or(NO_DATA)
        .to_string()
}

/// Summary shown on the report page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalReport {
    pub total_income: f64,
    pub top_car: String,
    pub total_bookings: usize,
}

impl RentalReport {
    pub fn from_reservations(reservations: &[Reservation]) -> Self {
        Self {
            total_income: total_revenue(reservations),
            top_car: top_rented_car(reservations),
            total_bookings: reservations.len(),
        }
    }
}
