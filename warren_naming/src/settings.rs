use crate::{
    DEFAULT_ERROR_EXCHANGE_PREFIX, DEFAULT_ERROR_QUEUE, DEFAULT_RPC_EXCHANGE,
    DEFAULT_RPC_RETURN_QUEUE_PREFIX, TypeNamingOverride,
};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Prefix of the environment variables that are layered on top of a loaded
/// configuration file, e.g. `WARREN_NAMING_RPC_EXCHANGE`.
pub const ENV_PREFIX: &str = "WARREN_NAMING";

/// Represents the application-level configuration section that covers the
/// fixed names used by the [`NamingPolicy`](crate::NamingPolicy):
///
/// - the default error queue and the error exchange prefix,
/// - the shared RPC exchange and the RPC return queue prefix,
/// - the default topic,
/// - per-type naming overrides, keyed by type identity or full type name.
///
/// Every field is optional; unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    #[serde(alias = "error_queue_name")]
    error_queue: Arc<str>,
    error_exchange_prefix: Arc<str>,
    #[serde(alias = "rpc_exchange_name")]
    rpc_exchange: Arc<str>,
    #[serde(alias = "rpc_response_prefix")]
    rpc_return_queue_prefix: Arc<str>,
    topic: Arc<str>,
    overrides: HashMap<Arc<str>, TypeNamingOverride>,
}

/// Represents the failure to assemble a [`NamingConfig`] from external
/// sources.
#[derive(Error, Debug)]
pub enum NamingConfigError {
    /// Indicates that the configuration sources could not be read or did not
    /// match the expected shape.
    #[error("failed to load naming configuration: {0}")]
    Load(#[from] ConfigError),
}

impl NamingConfig {
    /// Reports the name of the default error queue.
    pub fn error_queue(&self) -> &str {
        &self.error_queue
    }

    /// Reports the prefix of the per-routing-key error exchanges.
    pub fn error_exchange_prefix(&self) -> &str {
        &self.error_exchange_prefix
    }

    /// Reports the name of the shared RPC exchange.
    pub fn rpc_exchange(&self) -> &str {
        &self.rpc_exchange
    }

    /// Reports the prefix of the per-call RPC return queues.
    pub fn rpc_return_queue_prefix(&self) -> &str {
        &self.rpc_return_queue_prefix
    }

    /// Reports the default topic (routing key) for published messages.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Returns the configured naming overrides, keyed by type identity or full
    /// type name.
    pub fn overrides(&self) -> &HashMap<Arc<str>, TypeNamingOverride> {
        &self.overrides
    }
}

impl NamingConfig {
    /// Re-creates this configuration with the given default error queue name.
    pub fn with_error_queue(self, error_queue: impl AsRef<str>) -> Self {
        Self {
            error_queue: Arc::from(error_queue.as_ref()),
            ..self
        }
    }

    /// Re-creates this configuration with the given error exchange prefix.
    pub fn with_error_exchange_prefix(self, error_exchange_prefix: impl AsRef<str>) -> Self {
        Self {
            error_exchange_prefix: Arc::from(error_exchange_prefix.as_ref()),
            ..self
        }
    }

    /// Re-creates this configuration with the given RPC exchange name.
    pub fn with_rpc_exchange(self, rpc_exchange: impl AsRef<str>) -> Self {
        Self {
            rpc_exchange: Arc::from(rpc_exchange.as_ref()),
            ..self
        }
    }

    /// Re-creates this configuration with the given RPC return queue prefix.
    pub fn with_rpc_return_queue_prefix(self, rpc_return_queue_prefix: impl AsRef<str>) -> Self {
        Self {
            rpc_return_queue_prefix: Arc::from(rpc_return_queue_prefix.as_ref()),
            ..self
        }
    }

    /// Re-creates this configuration with the given default topic.
    pub fn with_topic(self, topic: impl AsRef<str>) -> Self {
        Self {
            topic: Arc::from(topic.as_ref()),
            ..self
        }
    }

    /// Re-creates this configuration with an additional naming override for
    /// the type known under the given name.
    pub fn with_override(mut self, name: impl AsRef<str>, naming_override: TypeNamingOverride) -> Self {
        self.overrides.insert(Arc::from(name.as_ref()), naming_override);

        self
    }
}

impl NamingConfig {
    /// Loads the configuration from the given file (the format is inferred
    /// from the extension: TOML or YAML), layered with the
    /// [`ENV_PREFIX`]-prefixed environment variables. Nested keys in
    /// environment variables are separated by a double underscore, e.g.
    /// `WARREN_NAMING_OVERRIDES__INVOICE__QUEUE`. Such keys arrive
    /// lower-cased, and override names are matched ignoring case.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NamingConfigError> {
        let path = path.as_ref();

        let config = Config::builder()
            .add_source(File::from(path))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let naming_config = Self::from_source(config)?;

        info!(
            path = %path.display(),
            overrides = naming_config.overrides.len(),
            "Loaded naming configuration",
        );

        Ok(naming_config)
    }

    /// Deserializes the configuration from an already assembled [`Config`],
    /// treating its root as the naming section.
    pub fn from_source(config: Config) -> Result<Self, NamingConfigError> {
        Ok(config.try_deserialize()?)
    }

    /// Deserializes the configuration from the section under the given `key`
    /// of an already assembled [`Config`]. A missing section yields the
    /// defaults.
    pub fn from_section(config: &Config, key: &str) -> Result<Self, NamingConfigError> {
        match config.get::<Self>(key) {
            Ok(naming_config) => Ok(naming_config),
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(error) => Err(error.into()),
        }
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            error_queue: Arc::from(DEFAULT_ERROR_QUEUE),
            error_exchange_prefix: Arc::from(DEFAULT_ERROR_EXCHANGE_PREFIX),
            rpc_exchange: Arc::from(DEFAULT_RPC_EXCHANGE),
            rpc_return_queue_prefix: Arc::from(DEFAULT_RPC_RETURN_QUEUE_PREFIX),
            topic: Arc::from(""),
            overrides: HashMap::new(),
        }
    }
}

impl AsRef<NamingConfig> for NamingConfig {
    fn as_ref(&self) -> &NamingConfig {
        self
    }
}
