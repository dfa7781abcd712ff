//! Domain services

pub mod availability;
pub mod pricing;
pub mod reporting;

pub use availability::{is_available, list_available, ranges_overlap};
pub use pricing::{daily_rate, quote, rental_days};
pub use reporting::{top_rented_car, top_rented_plate, total_revenue, RentalReport, NO_DATA};
