//! Settings for building an [`AcsClient`] from configuration sources.

use std::time::Duration;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::client::{AcsClient, AcsError};

/// Environment variable prefix used by [`AcsSettings::from_env`].
pub const ENV_PREFIX: &str = "ACS";

#[derive(Clone, Deserialize)]
pub struct AcsSettings {
    pub api_key: String,
    pub template: String,
    /// Only the first entry is used.
    #[serde(default)]
    pub endpoint: Vec<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl AcsSettings {
    /// Load settings from `ACS_*` environment variables.
    ///
    /// `ACS_ENDPOINT` is a comma-separated list; the other values are read as-is.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_environment(source: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                source
                    .prefix_separator("_")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("endpoint"),
            )
            .build()?
            .try_deserialize()
    }

    /// Build a client; the endpoint rules of [`AcsClient::new`] apply.
    pub fn into_client(self) -> Result<AcsClient, AcsError> {
        let mut builder = AcsClient::builder(self.api_key, self.template, &self.endpoint);
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        builder.build()
    }
}

impl std::fmt::Debug for AcsSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcsSettings")
            .field("api_key", &"***")
            .field("template", &self.template)
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
