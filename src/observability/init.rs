//! Tracing subscriber setup.

use super::exporter::{self, SCOPE_NAME};
use crate::infrastructure::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Trace file name inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "zatlas-otlp.json";

/// Installs the global subscriber exporting spans to the trace file.
///
/// The filter comes from `trace_level` (default `info`) and accepts full
/// `EnvFilter` directives such as `zatlas::domain=trace`. Observability is
/// optional: if the data directory cannot be created, nothing is installed.
/// Only the first call has any effect.
///
/// # Example
///
/// ```rust
/// use zatlas::observability::init_tracing;
/// use zatlas::Config;
///
/// init_tracing(&Config { trace_level: Some("debug".to_string()), ..Default::default() });
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SCOPE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = exporter::tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME)));

    let _ = subscriber.try_init();
}
