//! Diesel row models and service configuration.

#[cfg(feature = "server")]
pub mod config;
pub mod product;
