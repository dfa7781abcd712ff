//! Date-range availability checks

use chrono::NaiveDateTime;

use crate::model::{Car, Reservation};

/// Half-open overlap test for `[s1, e1)` and `[s2, e2)`
///
/// A range ending exactly when the other starts does not overlap it.
pub fn ranges_overlap(
    s1: NaiveDateTime,
    e1: NaiveDateTime,
    s2: NaiveDateTime,
    e2: NaiveDateTime,
) -> bool {
    !(e1 <= s2 || s1 >= e2)
}

/// Check whether a car can be rented for `[start, end)`
///
/// Unknown plates and inactive cars are never available.
pub fn is_available(
    cars: &[Car],
    reservations: &[Reservation],
    plate: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> bool {
    if start >= end {
        return false;
    }

    match cars.iter().find(|c| c.plate == plate) {
        Some(car) if car.active => {}
        _ => return false,
    }

    !reservations
        .iter()
        .filter(|r| r.plate == plate)
        .any(|r| ranges_overlap(r.start_date, r.end_date, start, end))
}

/// Active cars free for `[start, end)`, in registry order
pub fn list_available<'a>(
    cars: &'a [Car],
    reservations: &[Reservation],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Vec<&'a Car> {
    if start >= end {
        return Vec::new();
    }

    cars.iter()
        .filter(|c| c.active)
        .filter(|c| is_available(cars, reservations, &c.plate, start, end))
        .collect()
}
