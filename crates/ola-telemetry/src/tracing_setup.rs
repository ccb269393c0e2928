//! `tracing-subscriber` setup.
//!
//! Builds one registry with an `EnvFilter` and up to two `fmt` layers: one
//! for stderr and one appending to a log file. Both honor `json_logs`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::{TelemetryConfig, TelemetryError};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Build the filter from the configured level.
pub(crate) fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level)
        .map_err(|e| TelemetryError::Config(format!("invalid log filter: {e}")))
}

/// Build the output layers for the configured sinks.
pub(crate) fn build_layers(config: &TelemetryConfig) -> Result<Vec<BoxedLayer>, TelemetryError> {
    let mut layers: Vec<BoxedLayer> = Vec::new();

    if config.console_output {
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true);
        layers.push(if config.json_logs {
            layer.json().boxed()
        } else {
            layer.with_ansi(true).boxed()
        });
    }

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| TelemetryError::LogFile {
                path: path.display().to_string(),
                source: e,
            })?;
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true);
        layers.push(if config.json_logs {
            layer.json().boxed()
        } else {
            layer.boxed()
        });
    }

    Ok(layers)
}

/// Install the global subscriber.
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;
    let layers = build_layers(config)?;

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    tracing::info!(
        service = %config.service_name,
        level = %config.log_level,
        json = config.json_logs,
        "Logging initialized"
    );

    Ok(())
}
