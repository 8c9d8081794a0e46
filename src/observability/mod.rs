//! Observability for the bookmarks service
//!
//! Logging goes through `tracing`. Handlers emit one event per outcome
//! with structured fields:
//!
//! ```ignore
//! tracing::info!(id = bookmark.id, "bookmark created");
//! tracing::warn!(id, "bookmark not found");
//! ```
//!
//! [`init_telemetry`] installs the subscriber once at startup.

mod telemetry;

pub use telemetry::{init_telemetry, LogFormat, TelemetryConfig, TelemetryError};
