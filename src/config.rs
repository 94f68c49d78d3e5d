use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file read when no other path is given
pub const DEFAULT_CONFIG_FILE: &str = "energy-forecast.toml";

/// Environment prefix, e.g. `ENERGY_FORECAST__BIND_ADDRESS`
pub const ENV_PREFIX: &str = "ENERGY_FORECAST";

/// Settings of the static frontend server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the server listens on (IP:PORT)
    pub bind_address: String,
    /// Directory holding the compiled frontend bundle
    pub static_dir: PathBuf,
    /// Prediction backend the API routes are forwarded to
    pub backend_url: String,
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            static_dir: PathBuf::from("workspace/frontend/dist"),
            backend_url: "http://127.0.0.1:5000".to_string(),
            log_filter: "info,tower_http=debug".to_string(),
        }
    }
}

/// Load configuration: defaults, then the config file (if present), then
/// `ENERGY_FORECAST__*` environment variables.
pub fn load_config(config_file: Option<&Path>) -> Result<ServerConfig> {
    dotenvy::dotenv().ok();

    let defaults = ServerConfig::default();
    let file = match config_file {
        Some(path) => File::from(path.to_path_buf()).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let config = Config::builder()
        .set_default("bind_address", defaults.bind_address)?
        .set_default("static_dir", defaults.static_dir.to_string_lossy().to_string())?
        .set_default("backend_url", defaults.backend_url)?
        .set_default("log_filter", defaults.log_filter)?
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()
        .context("Failed to read configuration")?;

    config
        .try_deserialize()
        .context("Invalid configuration values")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "bind_address = \"127.0.0.1:8080\"").unwrap();
        writeln!(file, "backend_url = \"http://forecast.internal:5000\"").unwrap();

        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.backend_url, "http://forecast.internal:5000");
        assert_eq!(config.static_dir, ServerConfig::default().static_dir);
        assert_eq!(config.log_filter, ServerConfig::default().log_filter);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(load_config(Some(&missing)).is_err());
    }
}
