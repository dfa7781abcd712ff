//! Domain model types

pub mod car;
pub mod data_container;
pub mod datetime;
pub mod reservation;
pub mod seed;

pub use car::Car;
pub use data_container::DataContainer;
pub use reservation::Reservation;
pub use seed::seed_dataset;
