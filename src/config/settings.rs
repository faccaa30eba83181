// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
///
/// Covers the HTTP server, the search aggregator, the content fixtures
/// and the search client defaults
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// HTTP server configuration
    pub server: ServerSettings,
    /// Logging configuration
    pub logging: LoggingSettings,
    /// Metrics exporter configuration
    pub metrics: MetricsSettings,
    /// Search aggregator configuration
    pub search: SearchSettings,
    /// Content collection configuration
    #[serde(default)]
    pub content: ContentSettings,
    /// Search client configuration
    pub client: ClientSettings,
}

/// HTTP server configuration
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingSettings {
    /// Default tracing filter; `RUST_LOG` overrides it when set
    pub filter: String,
}

/// Metrics exporter configuration
#[derive(Debug, Deserialize)]
pub struct MetricsSettings {
    /// Exporter listen host
    pub host: String,
    /// Exporter listen port
    pub port: u16,
}

/// Search aggregator configuration
#[derive(Debug, Deserialize)]
pub struct SearchSettings {
    /// Maximum number of results returned per query
    pub max_results: usize,
}

/// Content collection configuration
#[derive(Debug, Default, Deserialize)]
pub struct ContentSettings {
    /// Directory holding YAML content overrides. When unset, or when a
    /// collection file is missing or malformed, the built-in fixtures
    /// are used for that collection.
    pub dir: Option<String>,
}

/// Search client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    /// Base URL of the search API the client talks to
    pub base_url: String,
    /// Debounce applied to query input before fetching (milliseconds)
    pub debounce_ms: u64,
    /// Validity window for reusing a response to an identical query (seconds)
    pub cache_ttl_secs: u64,
    /// Delay between selecting a result and navigating (milliseconds),
    /// matching the dialog close animation
    pub nav_delay_ms: u64,
}

impl Settings {
    /// Load settings from optional config files and the environment,
    /// falling back to built-in defaults.
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Server defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Logging defaults
            .set_default("logging.filter", "info,unisearch=debug")?
            // Metrics defaults
            .set_default("metrics.host", "0.0.0.0")?
            .set_default("metrics.port", 9000)?
            // Search defaults
            .set_default("search.max_results", 50)?
            // Client defaults
            .set_default("client.base_url", "http://localhost:3000")?
            .set_default("client.debounce_ms", 300)?
            .set_default("client.cache_ttl_secs", 30)?
            .set_default("client.nav_delay_ms", 200)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("UNISEARCH").separator("__"));

        builder.build()?.try_deserialize()
    }
}
