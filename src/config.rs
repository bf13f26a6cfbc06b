//! Configuration management for the `DayBrief` application
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings. Access keys are
//! never compiled in; they must arrive through a config file or the
//! `DAYBRIEF_` environment variables.

use crate::DayBriefError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `DayBrief` application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DayBriefConfig {
    /// Weather service configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// News service configuration
    #[serde(default)]
    pub news: NewsConfig,
    /// Historical-events page configuration
    #[serde(default)]
    pub events: EventsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default request settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Weather service configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Weather service access key
    pub api_key: Option<String>,
    /// Base URL for the weather service
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
}

/// News service configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    /// News service access key
    pub api_key: Option<String>,
    /// Base URL for the news service
    #[serde(default = "default_news_base_url")]
    pub base_url: String,
}

/// Historical-events page configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Page scraped for the "on this day" snippet
    #[serde(default = "default_events_page_url")]
    pub page_url: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Default request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Country code used when none is given on the command line
    #[serde(default = "default_country")]
    pub country: String,
    /// News category used when none is given on the command line
    #[serde(default = "default_category")]
    pub category: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_news_base_url() -> String {
    "https://newsapi.org/v2".to_string()
}

fn default_events_page_url() -> String {
    "https://en.wikipedia.org/wiki/Main_Page".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_country() -> String {
    "us".to_string()
}

fn default_category() -> String {
    "general".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
        }
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_news_base_url(),
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            page_url: default_events_page_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            country: default_country(),
            category: default_category(),
        }
    }
}

impl DayBriefConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment variable overrides with DAYBRIEF_ prefix, e.g.
        // DAYBRIEF_WEATHER__API_KEY for [weather] api_key
        builder = builder.add_source(
            Environment::with_prefix("DAYBRIEF")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: DayBriefConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("daybrief").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.news.base_url.is_empty() {
            self.news.base_url = default_news_base_url();
        }
        if self.events.page_url.is_empty() {
            self.events.page_url = default_events_page_url();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.defaults.country.is_empty() {
            self.defaults.country = default_country();
        }
        if self.defaults.category.is_empty() {
            self.defaults.category = default_category();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate access keys when present
    pub fn validate_api_keys(&self) -> Result<()> {
        for (name, key) in [
            ("Weather", &self.weather.api_key),
            ("News", &self.news.api_key),
        ] {
            if let Some(api_key) = key {
                if api_key.is_empty() {
                    return Err(DayBriefError::config(format!(
                        "{name} access key cannot be empty if provided. Either remove it or provide a valid key."
                    ))
                    .into());
                }

                if api_key.len() < 8 || api_key.len() > 100 {
                    return Err(DayBriefError::config(format!(
                        "{name} access key appears to be invalid. Please check your key."
                    ))
                    .into());
                }
            }
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(DayBriefError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("Weather base URL", &self.weather.base_url),
            ("News base URL", &self.news.base_url),
            ("Events page URL", &self.events.page_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(DayBriefError::config(format!(
                    "{name} must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}
