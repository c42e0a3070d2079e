// Configuration module entry point
// Loads layered configuration (file + environment) and owns the shared
// application state built from it.

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, PerformanceConfig, ServerConfig, SpaConfig};

impl Config {
    /// Load configuration from the default `config.toml` next to the binary.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension).
    /// Missing files are fine; every key has a default and `SERVER_*`
    /// environment variables override both.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("spa.root", "static")?
            .set_default("spa.fallback_path", "/index.html")?
            .set_default("spa.index_redirect", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = Config::load_from("does-not-exist").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.spa.root, "static");
        assert_eq!(config.spa.fallback_path, "/index.html");
        assert!(config.spa.index_redirect);
        assert_eq!(config.logging.access_log_format, "combined");
    }

    #[test]
    fn test_socket_addr() {
        let config = Config::load_from("does-not-exist").unwrap();
        let addr = config.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
    }
}
