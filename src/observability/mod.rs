//! Logging setup for the `tbap` binary.
//!
//! Library code only emits `tracing` events. The binary installs a
//! subscriber once at startup that writes to stderr, leaving stdout to
//! reports and JSON.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from the `-v`
//! count: none is `warn`, one is `info`, two is `debug`, three or more is
//! `trace`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for a `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
