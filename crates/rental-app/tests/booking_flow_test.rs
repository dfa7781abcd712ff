//! End-to-end booking flow against a data file on disk

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rental_app::repository::open_rental_manager_at;
use rental_domain::model::{Car, DataContainer};
use rental_domain::repository::RentalDataRepository;
use rental_infra::persistence::FileRentalRepository;
use rental_types::{BookingError, Error};
use std::fs;
use tempfile::tempdir;

fn day(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, d)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn write_fleet(path: &std::path::Path) {
    let data = DataContainer::new(
        vec![
            Car::new("X", "Test Car", 2500.0, "", "Sedan"),
            Car::new("Y", "Other Car", 1800.0, "", "Hatchback"),
        ],
        Vec::new(),
    );
    FileRentalRepository::new(path.to_path_buf())
        .save(&data)
        .unwrap();
}

#[test]
fn test_missing_file_is_seeded_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("data.json");

    let manager = open_rental_manager_at(path.clone());
    assert_eq!(manager.all_cars().len(), 5);
    assert!(path.exists());

    let stored = FileRentalRepository::new(path).load().unwrap().unwrap();
    assert_eq!(stored.cars.len(), 5);
    assert_eq!(stored.reservations.len(), 2);
}

#[test]
fn test_corrupt_file_falls_back_without_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "{\"cars\": [").unwrap();

    let manager = open_rental_manager_at(path.clone());
    assert_eq!(manager.all_cars().len(), 5);
    assert_eq!(manager.top_rented_car(), "34ABC123");
    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"cars\": [");
}

#[test]
fn test_booking_scenario_persists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    write_fleet(&path);

    let manager = open_rental_manager_at(path.clone());
    let reservation = manager.book("Deniz", "X", day(1), day(4)).unwrap();
    assert_eq!(reservation.total_charge, 7500.0);

    let err = manager
        .book("Ece", "X", day(2), day(2) + Duration::hours(12))
        .unwrap_err();
    assert!(matches!(err, Error::Booking(BookingError::Unavailable { .. })));
    assert_eq!(manager.reservations().len(), 1);

    let reopened = open_rental_manager_at(path);
    let reservations = reopened.reservations();
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0], reservation);
    assert!(!reopened.is_available("X", day(3), day(5)));
    assert!(reopened.is_available("X", day(4), day(5)));
}

#[test]
fn test_cancel_persists_and_frees_slot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    write_fleet(&path);

    let manager = open_rental_manager_at(path.clone());
    manager.book("Deniz", "Y", day(10), day(12)).unwrap();
    assert!(manager.cancel_latest("Y").is_some());

    let reopened = open_rental_manager_at(path);
    assert!(reopened.reservations().is_empty());
    assert!(reopened.book("Ece", "Y", day(10), day(12)).is_ok());
    assert_eq!(reopened.report().total_income, 3600.0);
}

#[test]
fn test_legacy_reservation_without_created_at_survives_booking() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(
        &path,
        r#"{
            "cars": [{"plate": "X", "makeModel": "Stored Car", "dailyRate": 2500}],
            "reservations": [
                {"customerName": "Old", "plate": "X",
                 "startDate": "2025-05-01T09:00:00", "endDate": "2025-05-03T09:00:00",
                 "totalCharge": 5000}
            ]
        }"#,
    )
    .unwrap();

    let manager = open_rental_manager_at(path.clone());
    let plates: Vec<_> = manager.all_cars().into_iter().map(|c| c.plate).collect();
    assert_eq!(plates, vec!["X"]);
    manager.book("Deniz", "X", day(1), day(2)).unwrap();

    let stored = FileRentalRepository::new(path).load().unwrap().unwrap();
    assert_eq!(stored.cars.len(), 1);
    assert_eq!(stored.reservations.len(), 2);
    assert_eq!(stored.reservations[0].customer_name, "Old");
}
