//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer provider → OtlpFileExporter → JSON lines
//! ```
//!
//! Spans are written to `<data_dir>/fisheye-otlp.json`, one OTLP document per
//! export. The file rotates at 10 MB and keeps three backups.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `exporter`: `SpanExporter` writing to the trace file
//! - `otlp`: OTLP JSON encoding
//! - `rotating_file`: Size-based rotation

mod exporter;
pub mod init;
mod otlp;
mod rotating_file;

pub use init::init_tracing;
