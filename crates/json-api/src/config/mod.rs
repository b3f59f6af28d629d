//! Server configuration module

use clap::Parser;

use crate::config::{
    elastic::ElasticSettings,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod elastic;
pub(crate) mod observability;
pub(crate) mod server;

/// Product Search JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "product-search-json", about = "Product Search JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request logging and metrics settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Elasticsearch settings.
    #[command(flatten)]
    pub elastic: ElasticSettings,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_parses_elastic_settings_from_arguments() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "product-search-json",
            "--elk-uri",
            "http://localhost:9200",
            "--elk-index",
            "products",
            "--port",
            "9000",
        ])?;

        assert_eq!(config.elastic.elk_uri, "http://localhost:9200");
        assert_eq!(config.elastic.elk_index, "products");
        assert!(config.elastic.elk_pretty_json);
        assert_eq!(config.socket_addr(), "0.0.0.0:9000");

        Ok(())
    }

    #[test]
    fn test_pretty_json_can_be_turned_off() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "product-search-json",
            "--elk-uri",
            "http://localhost:9200",
            "--elk-index",
            "products",
            "--elk-pretty-json",
            "false",
        ])?;

        assert!(!config.elastic.elk_pretty_json);
        assert!(!config.elastic.to_elastic_config().pretty_json);

        Ok(())
    }

    #[test]
    fn test_empty_index_name_is_rejected() {
        let result = ServerConfig::try_parse_from([
            "product-search-json",
            "--elk-uri",
            "http://localhost:9200",
            "--elk-index",
            "",
        ]);

        assert!(result.is_err(), "expected an empty index name to be rejected");
    }
}
