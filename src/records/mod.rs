//! Loading and holding the source table of hourly rental records.

pub mod data_loader;
pub mod error;
pub mod extractor;
pub mod store;
