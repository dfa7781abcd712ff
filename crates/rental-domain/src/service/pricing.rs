//! Rental price calculation

use chrono::NaiveDateTime;

use crate::model::Car;

/// Daily rate for a plate, or 0 when the plate is unknown
pub fn daily_rate(cars: &[Car], plate: &str) -> f64 {
    cars.iter()
        .find(|c| c.plate == plate)
        .map(|c| c.daily_rate)
        .unwrap_or(0.0)
}

/// Billable days: whole days in `end - start`, at least one
pub fn rental_days(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_days().max(1)
}

/// Total charge for renting `plate` over `[start, end)`
///
/// Returns 0 for a degenerate range or a car without a positive rate.
pub fn quote(cars: &[Car], plate: &str, start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    if start >= end {
        return 0.0;
    }

    let rate = daily_rate(cars, plate);
    if rate <= 0.0 {
        return 0.0;
    }

    rate * rental_days(start, end) as f64
}
