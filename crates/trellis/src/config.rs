// File: src/config.rs
// Purpose: Configuration parsing from trellis.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Directory containing route files (default: "routes")
    #[serde(default = "default_routes_dir")]
    pub routes_dir: String,

    /// Extension of route files, without the dot (default: "rs")
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Export names that are known non-handlers and should not trigger
    /// stray-export warnings (e.g. shared model constructors)
    #[serde(default)]
    pub skip_exports: Vec<String>,
}

// Default values
fn default_port() -> u16 {
    8000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_routes_dir() -> String {
    "routes".to_string()
}

fn default_extension() -> String {
    "rs".to_string()
}

// Default implementations
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            routes_dir: default_routes_dir(),
            extension: default_extension(),
            skip_exports: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        // If file is empty, return default config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./trellis.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("trellis.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.routing.routes_dir, "routes");
        assert_eq!(config.routing.extension, "rs");
        assert!(config.routing.skip_exports.is_empty());
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.routing.routes_dir, "routes");
    }

    #[test]
    fn test_custom_routing() {
        let toml = r#"
            [routing]
            routes_dir = "app"
            skip_exports = ["make_store", "seed"]
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.routing.routes_dir, "app");
        assert_eq!(config.routing.skip_exports, vec!["make_store", "seed"]);
        // Unspecified fields keep their defaults
        assert_eq!(config.routing.extension, "rs");
        assert_eq!(config.server.port, 8000);
    }
}
