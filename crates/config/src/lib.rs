//! Configuration management for the forecasting application.
//!
//! This crate holds the canonical default hyperparameters for each
//! forecasting model, merges user-supplied overrides onto those defaults,
//! and persists the merged configuration as a human-readable JSON file.

pub mod constants;
mod defaults;
mod merge;
mod store;

pub use defaults::default_configuration;
pub use merge::{Configuration, merge_defaults};
pub use store::{ConfigFileError, ConfigStore};
