//! Configuration module with one sub-module per concern
//!
//! - `database` - rule store backend and connection pool settings
//! - `environment` - environment detection and logging configuration
//! - `forwarding` - forwarding engine limits
//! - `server` - HTTP listener for the daemon
//! - `settings` - control-plane setting store (monitoring flag)
//! - `sms` - outbound SMS provider selection and credentials
//!
//! Sources are layered in this order, later sources winning:
//! built-in defaults for the detected environment, the optional
//! `config.<environment>.toml` file, then `SF__`-prefixed environment
//! variables (`SF__SMS__PROVIDER=twilio`).

pub mod database;
pub mod environment;
pub mod forwarding;
pub mod server;
pub mod settings;
pub mod sms;

use serde::{Deserialize, Serialize};

pub use database::{DatabaseConfig, StorageBackend};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use forwarding::ForwardingConfig;
pub use server::ServerConfig;
pub use settings::{SettingsBackend, SettingsConfig};
pub use sms::{SmsConfig, SmsProvider};

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "SF";

/// Separator between prefix and nested keys in environment variables
pub const ENV_SEPARATOR: &str = "__";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Rule store configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Setting store configuration
    #[serde(default)]
    pub settings: SettingsConfig,

    /// Outbound SMS configuration
    #[serde(default)]
    pub sms: SmsConfig,

    /// Forwarding engine configuration
    #[serde(default)]
    pub forwarding: ForwardingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Built-in defaults for an environment
    pub fn for_environment(environment: Environment) -> Self {
        let mut config = Self {
            environment,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            settings: SettingsConfig::default(),
            sms: SmsConfig::default(),
            forwarding: ForwardingConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        };

        if environment.is_production() {
            config.server = ServerConfig::new("0.0.0.0", 8080);
            config.database = DatabaseConfig::new("sqlite:///var/lib/sms-forwarder/rules.db");
        }

        config
    }

    /// Load configuration for the environment detected from the process environment
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let environment = Environment::from_env();
        Self::load_with(environment, Some(environment.config_file()))
    }

    /// Load configuration layering defaults, an optional file and `SF__` variables
    pub fn load_with(
        environment: Environment,
        file: Option<&str>,
    ) -> Result<Self, ::config::ConfigError> {
        let defaults = Self::for_environment(environment);

        let mut builder =
            ::config::Config::builder().add_source(::config::Config::try_from(&defaults)?);

        if let Some(path) = file {
            builder = builder.add_source(::config::File::with_name(path).required(false));
        }

        let config: Self = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints the type system cannot express
    pub fn validate(&self) -> Result<(), ::config::ConfigError> {
        if self.forwarding.max_single_message_length == 0 {
            return Err(::config::ConfigError::Message(
                "forwarding.max_single_message_length must be greater than zero".to_string(),
            ));
        }

        if self.settings.backend == SettingsBackend::Redis && self.settings.redis_url.is_empty() {
            return Err(::config::ConfigError::Message(
                "settings.redis_url is required when settings.backend = \"redis\"".to_string(),
            ));
        }

        if self.sms.provider == SmsProvider::Http && self.sms.gateway_url.is_none() {
            return Err(::config::ConfigError::Message(
                "sms.gateway_url is required when sms.provider = \"http\"".to_string(),
            ));
        }

        Ok(())
    }
}
