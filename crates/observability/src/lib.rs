//! Logging setup shared by every binary in the workspace.

pub mod logging;

pub use logging::{LogFormat, ObservabilityConfig};

/// Initialize process-wide logging with the default configuration.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    logging::init(&ObservabilityConfig::default());
}
