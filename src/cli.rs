use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::config::ServerConfig;
use commands::{check_config, serve};

#[derive(Parser)]
#[command(name = "energy-forecast")]
#[command(about = "Serves the energy consumption forecast frontend")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML)
    ///
    /// Defaults to `energy-forecast.toml` in the working directory when present.
    #[arg(short, long, global = true, env = "ENERGY_FORECAST_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind_address: Option<String>,

        /// Directory with the built frontend (the output of `trunk build`)
        #[arg(short, long, env = "STATIC_DIR")]
        static_dir: Option<PathBuf>,

        /// Prediction backend that /predict_date, /predict_day and /statistics
        /// are forwarded to (e.g., http://127.0.0.1:5000)
        #[arg(long, env = "BACKEND_URL")]
        backend_url: Option<String>,
    },
    /// Print the resolved configuration and exit
    CheckConfig,
}

impl Cli {
    pub async fn run(self, mut config: ServerConfig) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, static_dir, backend_url } => {
                if let Some(bind_address) = bind_address {
                    config.bind_address = bind_address;
                }
                if let Some(static_dir) = static_dir {
                    config.static_dir = static_dir;
                }
                if let Some(backend_url) = backend_url {
                    config.backend_url = backend_url;
                }
                serve(&config).await?;
            }
            Commands::CheckConfig => {
                check_config(&config)?;
            }
        }
        Ok(())
    }
}
