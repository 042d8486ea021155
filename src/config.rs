// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Configuration for the routing backend endpoint.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

use crate::errors::PlannerError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub backend: BackendConfig,
}

/// Where and how to reach the trip planning backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    pub scheme: String,
    pub host: String,
    pub port: Option<u16>,
    pub path: String,
    /// Request timeout in seconds. Plans over large constraint sets can
    /// take a while, hence the generous default.
    pub timeout_seconds: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: "tumhealthynavigation.health.in.tum.de".to_string(),
            port: Some(5000),
            path: "/api/route".to_string(),
            timeout_seconds: 300,
        }
    }
}

impl BackendConfig {
    /// Endpoint URL without query parameters.
    pub fn endpoint_url(&self) -> Result<Url, PlannerError> {
        let authority = match self.port {
            Some(port) => format!("{}://{}:{}{}", self.scheme, self.host, port, self.path),
            None => format!("{}://{}{}", self.scheme, self.host, self.path),
        };
        Ok(Url::parse(&authority)?)
    }
}

impl Config {
    /// Loads configuration from a TOML file, falling back to environment
    /// variables (with `.env` support) and built-in defaults.
    pub fn load(path: Option<String>) -> Result<Self> {
        let config_path = path.unwrap_or_else(|| {
            dirs::config_dir()
                .map(|p| p.join("healthnav/config.toml"))
                .unwrap_or_else(|| "config.toml".into())
                .to_string_lossy()
                .to_string()
        });

        if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            dotenv::dotenv().ok();

            let defaults = BackendConfig::default();
            let backend = BackendConfig {
                scheme: std::env::var("HEALTHNAV_BACKEND_SCHEME").unwrap_or(defaults.scheme),
                host: std::env::var("HEALTHNAV_BACKEND_HOST").unwrap_or(defaults.host),
                port: match std::env::var("HEALTHNAV_BACKEND_PORT") {
                    Ok(port) => Some(port.parse().context("Invalid HEALTHNAV_BACKEND_PORT")?),
                    Err(_) => defaults.port,
                },
                path: std::env::var("HEALTHNAV_BACKEND_PATH").unwrap_or(defaults.path),
                timeout_seconds: match std::env::var("HEALTHNAV_BACKEND_TIMEOUT") {
                    Ok(secs) => secs.parse().context("Invalid HEALTHNAV_BACKEND_TIMEOUT")?,
                    Err(_) => defaults.timeout_seconds,
                },
            };
            Ok(Config { backend })
        }
    }

    pub fn save(&self, path: Option<String>) -> Result<()> {
        let config_path = path.unwrap_or_else(|| {
            dirs::config_dir()
                .map(|p| p.join("healthnav/config.toml"))
                .unwrap_or_else(|| "config.toml".into())
                .to_string_lossy()
                .to_string()
        });

        let parent = Path::new(&config_path)
            .parent()
            .context("Invalid config path")?;
        fs::create_dir_all(parent)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_endpoint() {
        let backend = BackendConfig::default();
        let url = backend.endpoint_url().unwrap();
        assert_eq!(
            url.as_str(),
            "http://tumhealthynavigation.health.in.tum.de:5000/api/route"
        );
    }

    #[test]
    fn test_endpoint_without_port() {
        let backend = BackendConfig {
            port: None,
            host: "planner.example.com".to_string(),
            scheme: "https".to_string(),
            ..BackendConfig::default()
        };
        let url = backend.endpoint_url().unwrap();
        assert_eq!(url.as_str(), "https://planner.example.com/api/route");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir
            .path()
            .join("config.toml")
            .to_string_lossy()
            .to_string();

        let config = Config {
            backend: BackendConfig {
                scheme: "https".to_string(),
                host: "localhost".to_string(),
                port: Some(8080),
                path: "/otp/plan".to_string(),
                timeout_seconds: 30,
            },
        };
        config.save(Some(path.clone())).unwrap();

        let loaded = Config::load(Some(path)).unwrap();
        assert_eq!(loaded.backend.host, "localhost");
        assert_eq!(loaded.backend.port, Some(8080));
        assert_eq!(loaded.backend.path, "/otp/plan");
        assert_eq!(loaded.backend.timeout_seconds, 30);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir
            .path()
            .join("does-not-exist.toml")
            .to_string_lossy()
            .to_string();

        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.backend.path, "/api/route");
    }
}
