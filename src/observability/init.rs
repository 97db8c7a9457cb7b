//! Tracing subscriber setup.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name attached to every exported batch.
pub const SERVICE_NAME: &str = "fisheye";

/// File name of the active trace file inside the data directory.
pub const TRACE_FILE: &str = "fisheye-otlp.json";

/// Installs the global subscriber: an `EnvFilter` at `config.trace_level`
/// (default `info`) feeding an OpenTelemetry layer that exports to
/// `<data_dir>/fisheye-otlp.json`.
///
/// Observability is optional: if the data directory cannot be created or a
/// subscriber is already installed, this returns without doing anything.
///
/// # Example
///
/// ```rust
/// use fisheye::observability::init_tracing;
/// use fisheye::Config;
///
/// let dir = tempfile::tempdir()?;
/// let config = Config {
///     data_dir: dir.path().to_path_buf(),
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    if std::fs::create_dir_all(&config.data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = exporter::file_tracer_provider(config.data_dir.join(TRACE_FILE), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
