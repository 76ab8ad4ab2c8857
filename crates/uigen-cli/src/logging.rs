//! Tracing subscriber setup.
//!
//! The library crates only emit spans and events; this binary decides
//! where they go.  Verbosity flags map onto a per-crate filter string,
//! with `RUST_LOG` taking precedence when set so existing habits keep
//! working.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Install the global subscriber.  Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(env) => env,
        Err(_) => EnvFilter::new(filter_directives(verbosity_level(args))),
    };

    // Events go to stderr so generated listings on stdout stay pipeable.
    let ansi = !args.no_color && std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

/// Directive string covering the binary and both library crates at the
/// same level.
fn filter_directives(level: &str) -> String {
    format!("uigen={level},uigen_core={level},uigen_adapters={level}")
}

/// `--quiet` beats `-v`; each repetition raises the level one step.
fn verbosity_level(args: &GlobalArgs) -> &'static str {
    match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}
