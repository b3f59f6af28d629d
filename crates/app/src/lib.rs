//! Product search domain and Elasticsearch client.

pub mod context;
pub mod domain;
pub mod elastic;

#[cfg(test)]
mod test;
