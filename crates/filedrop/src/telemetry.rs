use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "filedrop=info,filedrop_core=info";

/// Initialize the tracing subscriber.
///
/// Emits one JSON object per event without ANSI colors or timestamps; the
/// Lambda log pipeline adds its own timestamp to every line.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .without_time()
                .with_target(true),
        )
        .init();
}
