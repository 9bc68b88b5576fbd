//! Core library exports for the catalog agent service.
//!
//! The `data` feature exposes the domain types, Diesel models and
//! repositories. The `server` feature adds the listing pipeline, the model
//! gateway and the Actix-web routes on top.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod categorizer;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod extractor;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod gateway;
#[cfg(feature = "server")]
pub mod pipeline;
#[cfg(feature = "server")]
pub mod prompts;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod similarity;
