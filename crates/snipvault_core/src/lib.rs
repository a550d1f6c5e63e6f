//! Core domain library for SnipVault (config, storage, models, filtering).

/// Configuration loading and defaults.
pub mod config;
/// Database access layer.
pub mod db;
/// Application error types (storage/domain).
pub mod error;
/// Client-side filter engine and tag vocabulary.
pub mod filter;
/// Data models for requests and persistence.
pub mod models;

pub use config::Config;
pub use db::Database;
pub use error::AppError;
