//! Application service layer - rental manager, config, repository wiring

pub mod app;
pub mod config;
pub mod repository;
