//! Rentable vehicle

use serde::{Deserialize, Serialize};

/// A car in the rental fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// License plate, the car's identifier
    #[serde(default)]
    pub plate: String,
    /// Display name (e.g., "Toyota Corolla 2024")
    #[serde(default)]
    pub make_model: String,
    /// Price per rental day
    #[serde(default)]
    pub daily_rate: f64,
    #[serde(default)]
    pub image_url: String,
    /// Free-form category tag (Sedan, SUV, Hatchback)
    #[serde(default = "default_category")]
    pub category: String,
    /// Inactive cars are hidden from listings and never available
    #[serde(default = "default_true")]
    pub active: bool,
}

pub const DEFAULT_CATEGORY: &str = "Sedan";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_true() -> bool {
    true
}

impl Car {
    /// Serialized field names
    pub const FIELDS: &'static [&'static str] = &[
        "plate",
        "makeModel",
        "dailyRate",
        "imageUrl",
        "category",
        "active",
    ];

    pub fn new(
        plate: impl Into<String>,
        make_model: impl Into<String>,
        daily_rate: f64,
        image_url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            plate: plate.into(),
            make_model: make_model.into(),
            daily_rate,
            image_url: image_url.into(),
            category: category.into(),
            active: true,
        }
    }

    /// Builder-style toggle for the active flag
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}
