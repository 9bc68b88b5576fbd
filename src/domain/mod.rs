//! Domain entities shared by the persistence and service layers.

pub mod listing;
pub mod types;
