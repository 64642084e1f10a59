//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFormat;

const DEFAULT_FILTER: &str = "calculator_api=info,tower_http=info";

/// Initialize the global tracing subscriber.
///
/// Reads `RUST_LOG`; falls back to `calculator_api=info,tower_http=info`.
///
/// ```bash
/// RUST_LOG=calculator_api=debug,tower_http=debug calculator-api --in-memory
/// ```
pub fn init(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}
