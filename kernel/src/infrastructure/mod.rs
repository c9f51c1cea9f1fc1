/// Configuration management.
pub mod config;
/// Telemetry setup for structured logging.
pub mod telemetry;
