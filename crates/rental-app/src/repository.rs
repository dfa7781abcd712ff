//! Repository adapters for persistence layer

use std::path::PathBuf;

use rental_infra::persistence::FileRentalRepository;

use crate::app::RentalManager;
use crate::config::Config;

/// Open file-based rental data repository
pub fn open_rental_repo(config: &Config) -> FileRentalRepository {
    FileRentalRepository::new(config.data_path())
}

/// Open the rental manager backed by the configured data file
pub fn open_rental_manager(config: &Config) -> RentalManager {
    RentalManager::open(open_rental_repo(config))
}

/// Open the rental manager backed by a specific data file
pub fn open_rental_manager_at(data_path: PathBuf) -> RentalManager {
    RentalManager::open(FileRentalRepository::new(data_path))
}
