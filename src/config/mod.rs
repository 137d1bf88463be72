// Configuration module entry point
// Loads layered configuration and holds the shared application state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, ServerConfig, StaticConfig};

impl Config {
    /// Load configuration from the default "aira.toml" file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("aira")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; environment variables with an `AIRA_` prefix
    /// override it, and built-in defaults fill the rest.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("AIRA"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.open_browser", true)?
            .set_default("static_files.root", "public")?
            .set_default("static_files.index", "index.html")?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// URL the browser is pointed at after startup
    pub fn root_url(&self) -> String {
        format!("http://localhost:{}", self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let cfg = Config::load_from("no-such-config-file").expect("defaults should load");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 3000);
        assert!(cfg.server.open_browser);
        assert_eq!(cfg.static_files.root, "public");
        assert_eq!(cfg.static_files.index, "index.html");
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_file, None);
        assert_eq!(cfg.logging.error_log_file, None);
    }

    #[test]
    fn test_socket_addr_parses_defaults() {
        let cfg = Config::load_from("no-such-config-file").expect("defaults should load");
        let addr = cfg.socket_addr().expect("default address should parse");
        assert_eq!(addr.port(), 3000);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_root_url_uses_port() {
        let mut cfg = Config::load_from("no-such-config-file").expect("defaults should load");
        cfg.server.port = 8123;
        assert_eq!(cfg.root_url(), "http://localhost:8123");
    }
}
