//! Repository trait definitions for data persistence

use rental_types::Error;

use crate::model::DataContainer;

/// Storage for the rental data envelope
pub trait RentalDataRepository {
    /// Load the stored envelope
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<DataContainer>, Error>;

    /// Overwrite the stored envelope
    fn save(&self, data: &DataContainer) -> Result<(), Error>;
}
