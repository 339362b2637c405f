//! Opt-in console logging.
//!
//! The library crates only emit `tracing` events. Nothing is printed until an
//! application calls [`install`] or registers its own subscriber.

use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

static TRACING_INSTALLED: Once = Once::new();

/// Install a stderr subscriber filtered by `RUST_LOG` (idempotent).
///
/// Without `RUST_LOG` only `info` and above are shown. Use
/// `RUST_LOG=colorup_valid=trace` to see every detection decision.
pub fn install() {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL.to_string()));

        let console = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(filter);

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            eprintln!("colorup logging failed to initialize: a global subscriber is already set");
        }
    });
}
