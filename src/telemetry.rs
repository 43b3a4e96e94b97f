//! Opt-in tracing bootstrap for binaries and demos.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is the embedding application's call. [`init`] wires up the common
//! setup: an `EnvFilter` honoring `RUST_LOG`, a compact fmt layer, and
//! `tracing_error`'s span-trace layer for richer error reports.

use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the default subscriber stack.
///
/// Filter resolution: `RUST_LOG` if set, otherwise `dialograph=info`.
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dialograph=info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .try_init();
}
