// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub spa: SpaConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// Asset serving configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SpaConfig {
    /// Directory the asset tree is rooted at
    #[serde(default = "default_root")]
    pub root: String,
    /// Document served for paths that resolve to no regular file.
    /// Empty disables the fallback: such requests fail instead.
    #[serde(default = "default_fallback_path")]
    pub fallback_path: String,
    /// Redirect `.../index.html` to its directory form
    #[serde(default = "default_index_redirect")]
    pub index_redirect: bool,
}

fn default_root() -> String {
    "static".to_string()
}

fn default_fallback_path() -> String {
    "/index.html".to_string()
}

const fn default_index_redirect() -> bool {
    true
}

impl Default for SpaConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            fallback_path: default_fallback_path(),
            index_redirect: default_index_redirect(),
        }
    }
}
