//! Core functionality for the TourDesk tour catalog.
//!
//! This crate provides the tour record types, the persistence layer and the
//! ambient configuration and logging setup shared by the desk layer and the
//! application binary.

pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod types;

pub use config::{Config, ConfigError, DisplayConfig, LoggingConfig, StorageConfig, ValidationConfig};
pub use error::{Result, StoreError};
pub use store::TourStore;
#[cfg(feature = "sqlite")]
pub use store::SqliteTourStore;
pub use types::{Tour, TourDraft, TourId};
