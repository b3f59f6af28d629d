//! Elasticsearch
//!
//! A thin REST client covering the handful of index and document calls the
//! service makes: index existence checks, index creation with an auto-derived
//! mapping, single document indexing and query-string search.

mod client;
mod config;
mod document;
mod errors;
mod query;
#[cfg(test)]
pub(crate) mod test_support;

pub use client::ElasticClient;
pub use config::ElasticConfig;
pub use document::{Document, FieldType, TypeMapping};
pub use errors::ElasticError;
pub use query::{MAX_SEARCH_RESULTS, Query, SearchRequest};
