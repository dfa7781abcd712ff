//! Booking of one car for one customer

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::datetime;

/// A reservation record
///
/// `total_charge` is computed when the booking is made and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(default)]
    pub customer_name: String,
    /// Plate of the reserved car
    #[serde(default)]
    pub plate: String,
    /// Missing values load as the Unix epoch
    #[serde(with = "datetime", default)]
    pub start_date: NaiveDateTime,
    /// Exclusive end of the rental period
    #[serde(with = "datetime", default)]
    pub end_date: NaiveDateTime,
    #[serde(default)]
    pub total_charge: f64,
    /// Missing values load as the current local time
    #[serde(with = "datetime", default = "local_now")]
    pub created_at: NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl Reservation {
    /// Serialized field names
    pub const FIELDS: &'static [&'static str] = &[
        "customerName",
        "plate",
        "startDate",
        "endDate",
        "totalCharge",
        "createdAt",
    ];

    /// Create a reservation stamped with the current local time
    pub fn new(
        customer_name: impl Into<String>,
        plate: impl Into<String>,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
        total_charge: f64,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            plate: plate.into(),
            start_date,
            end_date,
            total_charge,
            created_at: local_now(),
        }
    }

    /// Whether the customer name matches, ignoring case
    pub fn is_for_customer(&self, name: &str) -> bool {
        self.customer_name.to_lowercase() == name.to_lowercase()
    }
}
