//! Application services

mod rental_manager;

pub use rental_manager::RentalManager;
