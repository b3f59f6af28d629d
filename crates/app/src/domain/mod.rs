//! Domain Concerns

pub mod products;
