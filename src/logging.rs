//! Logging initialization.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to
/// `info,softras=debug`, which shows one statistics line per frame. Set
/// `RUST_LOG=softras=trace` to see every culled or skipped triangle.
///
/// Call once, from the binary; libraries should never install a subscriber.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,softras=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
