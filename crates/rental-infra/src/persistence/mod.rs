//! Persistence implementations
//!
//! File-based implementations of the repository traits.

mod file_rental_repo;

pub use file_rental_repo::{normalize_field_names, FileRentalRepository};
