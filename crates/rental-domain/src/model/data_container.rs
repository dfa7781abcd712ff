//! Persisted envelope holding the whole durable state

use serde::{Deserialize, Deserializer, Serialize};

use super::{Car, Reservation};

/// Top-level data document: `{ "cars": [...], "reservations": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataContainer {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cars: Vec<Car>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reservations: Vec<Reservation>,
}

impl DataContainer {
    /// Serialized field names
    pub const FIELDS: &'static [&'static str] = &["cars", "reservations"];

    pub fn new(cars: Vec<Car>, reservations: Vec<Reservation>) -> Self {
        Self { cars, reservations }
    }

    /// Every field name used anywhere in the document
    pub fn known_field_names() -> impl Iterator<Item = &'static str> {
        Self::FIELDS
            .iter()
            .chain(Car::FIELDS)
            .chain(Reservation::FIELDS)
            .copied()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
