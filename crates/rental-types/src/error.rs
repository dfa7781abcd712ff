//! Error types for car-rental

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Booking validation errors, surfaced to the caller with a readable reason
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("End date must be after start date")]
    InvalidRange,

    #[error("Car not found: {0}")]
    CarNotFound(String),

    #[error("Car {plate} is not available for the selected dates")]
    Unavailable { plate: String },

    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Data file errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Failed to write {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Booking failed: {0}")]
    Booking(#[from] BookingError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
