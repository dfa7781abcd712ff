//! Rental Manager - availability, pricing, booking, and reporting
//!
//! Owns the car registry and the reservation ledger for the lifetime of the
//! process. The registry is read-only after loading. Every ledger mutation
//! and the save that follows it run under one lock, so concurrent bookings
//! cannot both claim the same slot.
//!
//! Persistence is best effort: load failures fall back to the seed dataset
//! and save failures are logged and dropped.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, warn};

use rental_domain::model::{seed_dataset, Car, DataContainer, Reservation};
use rental_domain::repository::RentalDataRepository;
use rental_domain::service::{self, RentalReport};
use rental_types::{BookingError, Result};

type SharedRepository = Box<dyn RentalDataRepository + Send + Sync>;

pub struct RentalManager {
    cars: Vec<Car>,
    ledger: Mutex<Vec<Reservation>>,
    repository: SharedRepository,
}

impl RentalManager {
    /// Load data from the repository, seeding it when nothing usable exists
    pub fn open<R>(repository: R) -> Self
    where
        R: RentalDataRepository + Send + Sync + 'static,
    {
        let data = match repository.load() {
            Ok(Some(data)) => {
                debug!(
                    cars = data.cars.len(),
                    reservations = data.reservations.len(),
                    "loaded rental data"
                );
                data
            }
            Ok(None) => {
                info!("no rental data found, writing seed dataset");
                let data = seed_dataset(Local::now().naive_local());
                if let Err(e) = repository.save(&data) {
                    warn!(error = %e, "failed to write seed dataset");
                }
                data
            }
            Err(e) => {
                warn!(error = %e, "failed to load rental data, using seed dataset");
                seed_dataset(Local::now().naive_local())
            }
        };

        Self::with_data(data, repository)
    }

    /// Build a manager over already-loaded data
    pub fn with_data<R>(data: DataContainer, repository: R) -> Self
    where
        R: RentalDataRepository + Send + Sync + 'static,
    {
        Self {
            cars: data.cars,
            ledger: Mutex::new(data.reservations),
            repository: Box::new(repository),
        }
    }

    fn ledger(&self) -> MutexGuard<'_, Vec<Reservation>> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, reservations: &[Reservation]) {
        let data = DataContainer::new(self.cars.clone(), reservations.to_vec());
        if let Err(e) = self.repository.save(&data) {
            warn!(error = %e, "failed to save rental data, change kept in memory only");
        }
    }

    // ========================================================================
    // Car registry
    // ========================================================================

    /// Active cars, in registry order
    pub fn all_cars(&self) -> Vec<Car> {
        self.cars.iter().filter(|c| c.active).cloned().collect()
    }

    /// Find a car by plate, active or not
    pub fn find_car(&self, plate: &str) -> Option<&Car> {
        self.cars.iter().find(|c| c.plate == plate)
    }

    pub fn daily_rate(&self, plate: &str) -> f64 {
        service::daily_rate(&self.cars, plate)
    }

    // ========================================================================
    // Availability and pricing
    // ========================================================================

    pub fn is_available(&self, plate: &str, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        service::is_available(&self.cars, &self.ledger(), plate, start, end)
    }

    /// Active cars free for the whole range
    pub fn available_cars(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<Car> {
        service::list_available(&self.cars, &self.ledger(), start, end)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn quote(&self, plate: &str, start: NaiveDateTime, end: NaiveDateTime) -> f64 {
        service::quote(&self.cars, plate, start, end)
    }

    // ========================================================================
    // Reservations
    // ========================================================================

    /// Book a car and persist the ledger
    ///
    /// Nothing changes when the range is empty or inverted, the plate is
    /// unknown, or the car is inactive or already booked in the range.
    pub fn book(
        &self,
        customer_name: &str,
        plate: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Reservation> {
        if start >= end {
            return Err(BookingError::InvalidRange.into());
        }
        if self.find_car(plate).is_none() {
            return Err(BookingError::CarNotFound(plate.to_string()).into());
        }

        let mut ledger = self.ledger();
        if !service::is_available(&self.cars, &ledger, plate, start, end) {
            return Err(BookingError::Unavailable {
                plate: plate.to_string(),
            }
            .into());
        }

        let charge = service::quote(&self.cars, plate, start, end);
        let reservation = Reservation::new(customer_name, plate, start, end, charge);
        ledger.push(reservation.clone());
        self.persist(&ledger);

        info!(
            plate,
            customer = customer_name,
            charge,
            "reservation created"
        );
        Ok(reservation)
    }

    /// Remove the most recently added reservation for a plate
    ///
    /// Returns the removed reservation, or `None` if the plate has none.
    pub fn cancel_latest(&self, plate: &str) -> Option<Reservation> {
        let mut ledger = self.ledger();
        let index = ledger.iter().rposition(|r| r.plate == plate)?;
        let removed = ledger.remove(index);
        self.persist(&ledger);

        info!(plate, customer = %removed.customer_name, "reservation cancelled");
        Some(removed)
    }

    /// Snapshot of every reservation, in ledger order
    pub fn reservations(&self) -> Vec<Reservation> {
        self.ledger().clone()
    }

    /// Reservations for a customer, matching the name case-insensitively
    pub fn reservations_for_customer(&self, name: &str) -> Vec<Reservation> {
        self.ledger()
            .iter()
            .filter(|r| r.is_for_customer(name))
            .cloned()
            .collect()
    }

    // ========================================================================
    // Reporting
    // ========================================================================

    pub fn total_revenue(&self) -> f64 {
        service::total_revenue(&self.ledger())
    }

    /// Most rented plate, or "No Data" for an empty ledger
    pub fn top_rented_car(&self) -> String {
        service::top_rented_car(&self.ledger())
    }

    pub fn report(&self) -> RentalReport {
        RentalReport::from_reservations(&self.ledger())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use rental_types::Error;
    use std::sync::Arc;
    use std::thread;

    /// Repository keeping every saved envelope in memory
    #[derive(Clone, Default)]
    struct MemoryRepository {
        stored: Arc<Mutex<Option<DataContainer>>>,
        saves: Arc<Mutex<usize>>,
        fail: bool,
    }

    impl MemoryRepository {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn stored(&self) -> Option<DataContainer> {
            self.stored.lock().unwrap().clone()
        }

        fn save_count(&self) -> usize {
            *self.saves.lock().unwrap()
        }
    }

    impl RentalDataRepository for MemoryRepository {
        fn load(&self) -> Result<Option<DataContainer>> {
            if self.fail {
                return Err(Error::InvalidInput("unreadable".to_string()));
            }
            Ok(self.stored())
        }

        fn save(&self, data: &DataContainer) -> Result<()> {
            if self.fail {
                return Err(Error::InvalidInput("read-only".to_string()));
            }
            *self.stored.lock().unwrap() = Some(data.clone());
            *self.saves.lock().unwrap() += 1;
            Ok(())
        }
    }

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn fleet() -> DataContainer {
        DataContainer::new(
            vec![
                Car::new("X", "Car X", 2500.0, "", "Sedan"),
                Car::new("Y", "Car Y", 3000.0, "", "SUV"),
                Car::new("OLD", "Retired", 1000.0, "", "Sedan").with_active(false),
            ],
            Vec::new(),
        )
    }

    fn manager() -> (RentalManager, MemoryRepository) {
        let repo = MemoryRepository::default();
        (RentalManager::with_data(fleet(), repo.clone()), repo)
    }

    #[test]
    fn test_open_missing_data_seeds_and_saves() {
        let repo = MemoryRepository::default();
        let manager = RentalManager::open(repo.clone());

        assert_eq!(manager.all_cars().len(), 5);
        assert_eq!(manager.reservations().len(), 2);
        assert_eq!(repo.save_count(), 1);
        assert_eq!(repo.stored().unwrap().cars.len(), 5);
    }

    #[test]
    fn test_open_failed_load_seeds_without_error() {
        let manager = RentalManager::open(MemoryRepository::failing());
        assert_eq!(manager.all_cars().len(), 5);
        assert_eq!(manager.total_revenue(), 1800.0);
    }

    #[test]
    fn test_open_uses_stored_data() {
        let repo = MemoryRepository::default();
        *repo.stored.lock().unwrap() = Some(fleet());

        let manager = RentalManager::open(repo.clone());
        assert_eq!(manager.all_cars().len(), 2);
        assert!(manager.reservations().is_empty());
        assert_eq!(repo.save_count(), 0);
    }

    #[test]
    fn test_all_cars_hides_inactive() {
        let (manager, _) = manager();
        let plates: Vec<_> = manager.all_cars().into_iter().map(|c| c.plate).collect();
        assert_eq!(plates, vec!["X", "Y"]);
        assert!(manager.find_car("OLD").is_some());
    }

    #[test]
    fn test_book_three_days_then_overlap_fails() {
        let (manager, repo) = manager();

        let quoted = manager.quote("X", day(1), day(4));
        let reservation = manager.book("Ali", "X", day(1), day(4)).unwrap();
        assert_eq!(reservation.total_charge, 7500.0);
        assert_eq!(reservation.total_charge, quoted);
        assert_eq!(manager.reservations().len(), 1);
        assert_eq!(repo.stored().unwrap().reservations.len(), 1);

        let err = manager.book("Veli", "X", day(2), day(3)).unwrap_err();
        assert!(matches!(
            err,
            Error::Booking(BookingError::Unavailable { ref plate }) if plate == "X"
        ));
        assert_eq!(manager.reservations().len(), 1);
        assert_eq!(repo.save_count(), 1);
    }

    #[test]
    fn test_back_to_back_bookings() {
        let (manager, _) = manager();
        manager.book("A", "X", day(1), day(3)).unwrap();
        manager.book("B", "X", day(3), day(5)).unwrap();
        assert!(manager.book("C", "X", day(1), day(5)).is_err());
        assert_eq!(manager.reservations().len(), 2);
    }

    #[test]
    fn test_book_rejections() {
        let (manager, repo) = manager();

        let err = manager.book("A", "X", day(3), day(3)).unwrap_err();
        assert!(matches!(err, Error::Booking(BookingError::InvalidRange)));

        let err = manager.book("A", "X", day(4), day(3)).unwrap_err();
        assert!(matches!(err, Error::Booking(BookingError::InvalidRange)));

        let err = manager.book("A", "NOPE", day(1), day(3)).unwrap_err();
        assert!(matches!(err, Error::Booking(BookingError::CarNotFound(_))));

        let err = manager.book("A", "OLD", day(1), day(3)).unwrap_err();
        assert!(matches!(err, Error::Booking(BookingError::Unavailable { .. })));

        assert!(manager.reservations().is_empty());
        assert_eq!(repo.save_count(), 0);
    }

    #[test]
    fn test_same_day_booking_charges_one_day() {
        let (manager, _) = manager();
        let r = manager
            .book("A", "Y", day(2), day(2) + Duration::hours(6))
            .unwrap();
        assert_eq!(r.total_charge, 3000.0);
    }

    #[test]
    fn test_cancel_latest_frees_slot() {
        let (manager, repo) = manager();
        manager.book("A", "X", day(1), day(3)).unwrap();
        manager.book("B", "X", day(5), day(7)).unwrap();

        let removed = manager.cancel_latest("X").unwrap();
        assert_eq!(removed.customer_name, "B");
        assert_eq!(manager.reservations().len(), 1);
        assert_eq!(repo.stored().unwrap().reservations.len(), 1);

        assert!(manager.book("C", "X", day(5), day(7)).is_ok());
    }

    #[test]
    fn test_cancel_latest_without_match_is_noop() {
        let (manager, repo) = manager();
        manager.book("A", "X", day(1), day(3)).unwrap();

        assert!(manager.cancel_latest("Y").is_none());
        assert_eq!(manager.reservations().len(), 1);
        assert_eq!(repo.save_count(), 1);
    }

    #[test]
    fn test_failed_save_keeps_booking_in_memory() {
        let manager = RentalManager::with_data(fleet(), MemoryRepository::failing());
        let r = manager.book("A", "X", day(1), day(2)).unwrap();
        assert_eq!(r.total_charge, 2500.0);
        assert_eq!(manager.reservations().len(), 1);
    }

    #[test]
    fn test_reservations_for_customer() {
        let (manager, _) = manager();
        manager.book("Ayşe Kaya", "X", day(1), day(2)).unwrap();
        manager.book("Mehmet", "Y", day(1), day(2)).unwrap();
        manager.book("AYŞE KAYA", "Y", day(3), day(4)).unwrap();

        let found = manager.reservations_for_customer("ayşe kaya");
        assert_eq!(found.len(), 2);
        assert!(manager.reservations_for_customer("ayşe").is_empty());
    }

    #[test]
    fn test_report() {
        let (manager, _) = manager();
        assert_eq!(manager.top_rented_car(), "No Data");

        manager.book("A", "X", day(1), day(2)).unwrap();
        manager.book("B", "X", day(2), day(3)).unwrap();
        manager.book("C", "Y", day(1), day(3)).unwrap();

        let report = manager.report();
        assert_eq!(report.top_car, "X");
        assert_eq!(report.total_income, 2500.0 + 2500.0 + 6000.0);
        assert_eq!(report.total_bookings, 3);
    }

    #[test]
    fn test_available_cars() {
        let (manager, _) = manager();
        manager.book("A", "X", day(1), day(5)).unwrap();

        let plates: Vec<_> = manager
            .available_cars(day(2), day(3))
            .into_iter()
            .map(|c| c.plate)
            .collect();
        assert_eq!(plates, vec!["Y"]);
        assert!(manager.available_cars(day(3), day(2)).is_empty());
        assert!(manager.is_available("X", day(5), day(6)));
    }

    #[test]
    fn test_concurrent_bookings_claim_slot_once() {
        let manager = Arc::new(RentalManager::with_data(
            fleet(),
            MemoryRepository::default(),
        ));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let manager = Arc::clone(&manager);
                thread::spawn(move || manager.book(&format!("C{}", i), "X", day(1), day(3)).is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(manager.reservations().len(), 1);
    }
}
