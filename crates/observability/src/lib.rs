//! Tracing and logging (shared setup).

/// Initialize process-wide logging with the default format (JSON).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::default());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use tracing::{LogFormat, UnknownLogFormat};
