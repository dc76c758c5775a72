//! Framework configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod extensions;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::extensions::ExtensionsConfig;
use self::logging::LoggingConfig;

use crate::error::FrameworkError;

/// Root framework configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameworkConfig {
    /// Core application settings.
    #[serde(default)]
    pub core: CoreConfig,
    /// Extension loading settings.
    #[serde(default)]
    pub extensions: ExtensionsConfig,
    /// Active handler selection per handler type.
    #[serde(default)]
    pub handlers: HandlerSelection,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Core application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// The application label, used in log output and diagnostics.
    #[serde(default = "default_label")]
    pub label: String,
}

/// Names the handler label the application should resolve for each
/// built-in handler type. Extensions register the implementations;
/// this section only selects among them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandlerSelection {
    /// Label of the active config handler.
    #[serde(default = "default_config_handler")]
    pub config: String,
    /// Label of the active output handler.
    #[serde(default = "default_output_handler")]
    pub output: String,
}

impl FrameworkConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `GIRDER_`.
    pub fn load(env: &str) -> Result<Self, FrameworkError> {
        tracing::debug!(env = %env, "loading framework configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("GIRDER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| FrameworkError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| FrameworkError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
        }
    }
}

impl Default for HandlerSelection {
    fn default() -> Self {
        Self {
            config: default_config_handler(),
            output: default_output_handler(),
        }
    }
}

fn default_label() -> String {
    "girder".to_string()
}

fn default_config_handler() -> String {
    "toml".to_string()
}

fn default_output_handler() -> String {
    "json".to_string()
}
