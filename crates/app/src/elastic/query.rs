//! Search request and response bodies.

use serde::{Deserialize, Serialize};

/// Upper bound on the number of hits requested by a search.
pub const MAX_SEARCH_RESULTS: usize = 1000;

/// Query DSL clauses used by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    /// Lucene query-string query, supporting `*` and `?` wildcards.
    QueryString {
        /// Raw query string handed to the parser.
        query: String,
    },
}

/// `_search` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    /// The query to run.
    pub query: Query,

    /// Maximum number of hits to return.
    pub size: usize,
}

impl SearchRequest {
    /// Match `keyword` anywhere in analyzed text by wrapping it in `*`.
    ///
    /// An empty keyword yields `**`; how that pattern matches is left to the
    /// query-string parser.
    #[must_use]
    pub fn wildcard(keyword: &str) -> Self {
        Self {
            query: Query::QueryString {
                query: format!("*{keyword}*"),
            },
            size: MAX_SEARCH_RESULTS,
        }
    }

    /// Override the hit cap.
    #[must_use]
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchResponse<T> {
    pub(super) hits: Hits<T>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Hits<T> {
    pub(super) hits: Vec<Hit<T>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Hit<T> {
    #[serde(rename = "_source")]
    pub(super) source: T,
}

impl<T> SearchResponse<T> {
    pub(super) fn into_documents(self) -> Vec<T> {
        self.hits.hits.into_iter().map(|hit| hit.source).collect()
    }
}
