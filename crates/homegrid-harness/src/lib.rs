#![forbid(unsafe_code)]

//! Command-line harness for the homegrid engine.
//!
//! `show` and `place` work on layout documents directly; `replay` drives a
//! full [`homegrid::HomeSession`] from a recorded pointer trace.

pub mod cli;
pub mod error;
pub mod render;
pub mod trace;

pub use cli::{Cli, Commands, run, run_from_env, run_with};
pub use error::{HarnessError, Result};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install a stderr subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_level.into());
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}
