//! Telemetry configuration.
//!
//! This module defines log level and output format settings.

use serde::Deserialize;

/// Logging settings.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TelemetrySettings {
    /// Default filter directive when `RUST_LOG` is unset (default: `warn`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

pub(super) fn default_log_level() -> String {
    "warn".to_string()
}
