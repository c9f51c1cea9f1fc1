//! Configuration management for the task tracker.
//!
//! Values come from built-in defaults, then an optional `todo.toml` in the
//! working directory, then `TODO__`-prefixed environment variables
//! (`TODO__STORE__PATH=work.txt`).
//!
//! # Example
//!
//! ```
//! use todo_kernel::infrastructure::config::Settings;
//!
//! let settings = Settings::new().expect("Failed to load configuration");
//! assert!(!settings.telemetry.log_level.is_empty());
//! ```

pub mod store;
pub mod telemetry;

pub use store::StoreSettings;
pub use telemetry::TelemetrySettings;

use config::{Config, ConfigError, Environment, File, FileFormat, FileSourceFile};
use serde::Deserialize;
use std::path::Path;

/// Base name of the optional configuration file.
pub const CONFIG_FILE: &str = "todo";

/// Prefix of environment variables that override settings.
pub const ENV_PREFIX: &str = "TODO";

/// Top-level configuration.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Task file settings.
    #[serde(default)]
    pub store: StoreSettings,
    /// Logging settings.
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Loads settings from defaults, `todo.toml` (if present) and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or cannot be deserialized.
    pub fn new() -> Result<Self, ConfigError> {
        Self::build(File::with_name(CONFIG_FILE).required(false), environment())
    }

    /// Loads settings using `path` as the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::build(File::from(path).required(true), environment())
    }

    fn build(
        file: File<FileSourceFile, FileFormat>,
        env: Environment,
    ) -> Result<Self, ConfigError> {
        let s = Config::builder()
            // Start with default values
            .set_default("store.path", crate::repository::DEFAULT_TASK_FILE)?
            .set_default("telemetry.log_level", telemetry::default_log_level())?
            .set_default("telemetry.json", false)?
            .add_source(file)
            // Merge in Environment variables
            .add_source(env)
            .build()?;

        s.try_deserialize()
    }
}

/// `TODO__SECTION__KEY` variables, e.g. `TODO__TELEMETRY__JSON=true`.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}
