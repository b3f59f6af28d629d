//! Elasticsearch Config

use clap::{ArgAction, Args, builder::NonEmptyStringValueParser};

use product_search_app::elastic::ElasticConfig;

/// Elasticsearch connection settings.
#[derive(Debug, Args)]
pub struct ElasticSettings {
    /// Base URL of the Elasticsearch cluster
    #[arg(long, env = "ELK_URI", value_parser = NonEmptyStringValueParser::new())]
    pub elk_uri: String,

    /// Index used for both searching and indexing products
    #[arg(long, env = "ELK_INDEX", value_parser = NonEmptyStringValueParser::new())]
    pub elk_index: String,

    /// Request pretty-printed JSON from Elasticsearch
    #[arg(
        long,
        env = "ELK_PRETTY_JSON",
        action = ArgAction::Set,
        default_value_t = true
    )]
    pub elk_pretty_json: bool,
}

impl ElasticSettings {
    /// Client configuration for these settings.
    #[must_use]
    pub fn to_elastic_config(&self) -> ElasticConfig {
        ElasticConfig {
            uri: self.elk_uri.clone(),
            default_index: self.elk_index.clone(),
            pretty_json: self.elk_pretty_json,
        }
    }
}
