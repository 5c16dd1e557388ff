//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → SDK TracerProvider
//!     → FileSpanExporter → OTLP/JSON lines → zatlas-otlp.json (rotated)
//! ```
//!
//! Traces land in `~/.local/share/zellij/zatlas/zatlas-otlp.json`, rotated at
//! 10 MiB with three backups.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup from plugin configuration
//! - `exporter`: File-backed `SpanExporter` and tracer provider
//! - `otlp_json`: OTLP/JSON span encoding
//! - `rotating_file`: Size-rotated line writer

mod exporter;
pub mod init;
mod otlp_json;
mod rotating_file;

pub use init::init_tracing;
