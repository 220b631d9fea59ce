use crate::types::LogLevel;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise the explicit `--log-level`, then
/// `fallback`. Calling this twice is harmless.
pub fn init(level: Option<LogLevel>, fallback: &str) {
    let directive = level
        .map(|l| l.to_string())
        .unwrap_or_else(|| fallback.to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
