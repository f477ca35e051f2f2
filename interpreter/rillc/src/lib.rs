//! Rill CLI and interactive REPL.
//!
//! Owns every process concern the engine deliberately avoids: argument
//! handling, prompting and history, error display, tracing setup, and
//! exit codes. The engine itself never terminates the process.

pub mod commands;
pub mod repl;
pub mod report;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=rill_eval=debug` or `RUST_LOG=rill_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
