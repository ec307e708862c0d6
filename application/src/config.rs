//! [`Config`]-related definitions.

use std::time::Duration;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::infra::dummy_json;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: Server,

    /// Service configuration.
    pub service: Service,

    /// Remote data source configuration.
    pub source: Source,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,

    /// Delay between a successful login and the redirect to the recipes.
    #[default(Duration::from_secs(1))]
    #[serde(with = "humantime_serde")]
    pub redirect_delay: Duration,
}

/// Service configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// Artificial delay before checking login credentials.
    #[default(Duration::from_secs(1))]
    #[serde(with = "humantime_serde")]
    pub authentication_delay: Duration,

    /// Quiet period collapsing search term changes.
    #[default(Duration::from_millis(300))]
    #[serde(with = "humantime_serde")]
    pub search_debounce: Duration,

    /// Number of recipes revealed at a time.
    #[default(9)]
    pub page_size: usize,
}

impl From<Service> for service::Config {
    fn from(value: Service) -> Self {
        let Service {
            authentication_delay,
            search_debounce,
            page_size,
        } = value;
        Self {
            authentication_delay,
            search_debounce,
            page_size,
        }
    }
}

/// Remote data source configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Source {
    /// Base URL of the [DummyJSON] API.
    ///
    /// [DummyJSON]: https://dummyjson.com
    #[default("https://dummyjson.com".to_owned())]
    pub base_url: String,

    /// Timeout of a single request.
    #[default(Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl From<Source> for dummy_json::Config {
    fn from(value: Source) -> Self {
        let Source { base_url, timeout } = value;
        Self { base_url, timeout }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
