//! Domain layer for car-rental
//!
//! Models, repository traits, and the pure rules of the rental engine:
//! availability, pricing, and reporting.

pub mod model;
pub mod repository;
pub mod service;
