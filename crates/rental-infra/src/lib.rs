//! Infrastructure layer - persistence implementations, data path resolution

pub mod data_path;
pub mod persistence;
