//! Process-wide logging setup shared by the binaries.

/// Subscriber setup (filters, output format).
pub mod tracing;

pub use tracing::LogFormat;

/// Initialize logging with the format named by `AGENTMART_LOG_FORMAT`.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init(LogFormat::from_env());
}
