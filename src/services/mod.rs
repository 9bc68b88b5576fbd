pub mod errors;
pub mod export;
pub mod listings;
pub mod main;
pub mod products;

pub use errors::{ServiceError, ServiceResult};
