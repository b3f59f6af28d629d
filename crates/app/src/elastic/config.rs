//! Elasticsearch connection settings.

/// Configuration for connecting to an Elasticsearch cluster.
#[derive(Debug, Clone)]
pub struct ElasticConfig {
    /// Base URL of the cluster, e.g. `"http://localhost:9200"`.
    pub uri: String,

    /// Index used for searching and indexing documents.
    pub default_index: String,

    /// Ask Elasticsearch for pretty-printed JSON responses.
    pub pretty_json: bool,
}

impl ElasticConfig {
    /// Create a configuration with pretty JSON enabled.
    #[must_use]
    pub fn new(uri: impl Into<String>, default_index: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            default_index: default_index.into(),
            pretty_json: true,
        }
    }
}
