//! Products

pub mod bootstrap;
pub mod errors;
pub mod models;
pub mod service;

pub use errors::ProductsServiceError;
pub use service::*;
