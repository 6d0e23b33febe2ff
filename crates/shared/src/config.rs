//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Market data upstream configuration.
    pub upstream: UpstreamConfig,
    /// In-memory cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Market data upstream configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the market data API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key appended to every upstream request.
    pub api_key: String,
    /// Reporting period requested for income statements.
    #[serde(default = "default_period")]
    pub period: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://financialmodelingprep.com".to_string()
}

fn default_period() -> String {
    "annual".to_string()
}

fn default_timeout() -> u64 {
    10
}

/// In-memory cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of company profiles kept in memory.
    #[serde(default = "default_profile_capacity")]
    pub profile_capacity: u64,
    /// Time-to-live for cached company profiles, in seconds.
    #[serde(default = "default_profile_ttl")]
    pub profile_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            profile_capacity: default_profile_capacity(),
            profile_ttl_secs: default_profile_ttl(),
        }
    }
}

fn default_profile_capacity() -> u64 {
    10_000
}

fn default_profile_ttl() -> u64 {
    86_400 // 1 day
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, e.g. when no
    /// upstream API key is set.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("INCOMELENS").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
