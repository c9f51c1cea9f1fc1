use anyhow::{Context, Result};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use super::config::TelemetrySettings;

/// Builder for setting up structured logging.
///
/// Output goes to stderr so that command output on stdout stays clean.
pub struct TelemetryBuilder {
    service_name: String,
    log_level: String,
    json: bool,
}

impl TelemetryBuilder {
    /// Creates a builder that logs at `info` in text form.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: "info".to_string(),
            json: false,
        }
    }

    /// Creates a builder from loaded settings.
    #[must_use]
    pub fn from_settings(service_name: impl Into<String>, settings: &TelemetrySettings) -> Self {
        Self::new(service_name)
            .with_log_level(settings.log_level.clone())
            .with_json(settings.json)
    }

    /// Sets the filter used when `RUST_LOG` is not set.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Switches between JSON lines and human-readable output.
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Builds the filter: `RUST_LOG` if set, else the configured level.
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }

    /// Installs the global subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(self) -> Result<()> {
        let env_filter = self.env_filter();

        let fmt_layer = if self.json {
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .boxed()
        } else {
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .boxed()
        };

        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("Failed to init subscriber")?;

        tracing::debug!(service = %self.service_name, "Telemetry initialized");
        Ok(())
    }
}
