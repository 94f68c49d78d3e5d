use anyhow::{Context, Result};
use tracing::warn;

use crate::config::ServerConfig;

pub fn check_config(config: &ServerConfig) -> Result<()> {
    let rendered = serde_json::to_string_pretty(config).context("Failed to render configuration")?;
    println!("{}", rendered);

    if !config.static_dir.join("index.html").is_file() {
        warn!("Static directory {} has no index.html", config.static_dir.display());
    }
    Ok(())
}
