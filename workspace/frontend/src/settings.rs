use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend API host; `None` sends requests to the page's own origin
    pub api_host: Option<String>,

    /// Backend API port, only used together with `api_host`
    pub api_port: u16,

    /// Path prefix in front of the prediction routes (e.g., "/api")
    pub api_path: String,

    /// Use HTTPS for API requests, only used together with `api_host`
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Separator used when grouping the record count
    pub group_separator: char,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: None,
            api_port: 5000,
            api_path: String::new(),
            api_use_https: false,
            log_level: Level::Info,
            group_separator: common::converters::DEFAULT_GROUP_SEPARATOR,
            debug_mode: false,
        }
    }
}

const STORAGE_PREFIX: &str = "energy_forecast_";

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            let read = |key: &str| {
                storage
                    .get_item(&format!("{}{}", STORAGE_PREFIX, key))
                    .ok()
                    .flatten()
                    .filter(|value| !value.is_empty())
            };

            if let Some(api_host) = read("api_host") {
                settings.api_host = Some(api_host);
            }

            if let Some(port_val) = read("api_port").and_then(|p| p.parse::<u16>().ok()) {
                settings.api_port = port_val;
            }

            if let Some(api_path) = read("api_path") {
                settings.api_path = api_path;
            }

            if let Some(use_https) = read("api_use_https") {
                settings.api_use_https = use_https.to_lowercase() == "true";
            }

            if let Some(log_level) = read("log_level") {
                settings.log_level = match log_level.to_lowercase().as_str() {
                    "error" => Level::Error,
                    "warn" => Level::Warn,
                    "info" => Level::Info,
                    "debug" => Level::Debug,
                    "trace" => Level::Trace,
                    _ => settings.log_level,
                };
            }

            if let Some(separator) = read("group_separator").and_then(|s| s.chars().next()) {
                settings.group_separator = separator;
            }
        }

        settings
    }

    /// Get the base API URL; relative to the page when no host is set
    pub fn api_base_url(&self) -> String {
        match &self.api_host {
            Some(host) => {
                let protocol = if self.api_use_https { "https" } else { "http" };
                format!("{}://{}:{}{}", protocol, host, self.api_port, self.api_path)
            }
            None => self.api_path.clone(),
        }
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
