//! Fallback fleet and booking history used when no data file is usable

use chrono::{Duration, NaiveDateTime};

use super::{Car, DataContainer, Reservation};

/// Build the seed dataset: five cars and two past reservations
///
/// Reservation dates are relative to `now`; their charges are fixed values,
/// not derived from the car rates.
pub fn seed_dataset(now: NaiveDateTime) -> DataContainer {
    let cars = vec![
        Car::new(
            "34ABC123",
            "Toyota Corolla 2024",
            2500.0,
            "https://images.unsplash.com/photo-1621007947382-bb3c3994e3fb?w=800&h=600&fit=crop",
            "Sedan",
        ),
        Car::new(
            "34DEF456",
            "Renault Clio 5",
            2650.0,
            "https://images.unsplash.com/photo-1617814076367-b759c7d7e738?w=800&h=600&fit=crop",
            "Hatchback",
        ),
        Car::new(
            "34GHI789",
            "BMW 3 Series",
            3800.0,
            "https://images.unsplash.com/photo-1555215695-3004980ad54e?w=800&h=600&fit=crop",
            "Sedan",
        ),
        Car::new(
            "34JKL012",
            "Ford EcoSport",
            2700.0,
            "https://images.unsplash.com/photo-1611859266238-4b98091d9d9b?w=800&h=600&fit=crop",
            "SUV",
        ),
        Car::new(
            "34VWX234",
            "Hyundai i20",
            2550.0,
            "https://images.unsplash.com/photo-1619767886558-efdc259cde1a?w=800&h=600&fit=crop",
            "Hatchback",
        ),
    ];

    let reservations = vec![
        Reservation {
            customer_name: "Ahmet Yılmaz".to_string(),
            plate: "34ABC123".to_string(),
            start_date: now - Duration::days(5),
            end_date: now - Duration::days(2),
            total_charge: 750.0,
            created_at: now,
        },
        Reservation {
            customer_name: "Fatma Özdemir".to_string(),
            plate: "34DEF456".to_string(),
            start_date: now - Duration::days(3),
            end_date: now,
            total_charge: 1050.0,
            created_at: now,
        },
    ];

    DataContainer::new(cars, reservations)
}
