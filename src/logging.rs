//! Logging initialisation.
//!
//! `RUST_LOG` always wins. Otherwise the level comes from the CLI flags:
//! `--verbose` selects debug, `--quiet` selects error, info by default.
//! Logs go to stderr so stdout stays clean for command output.

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Pick the log level for the given flags. `verbose` wins over `quiet`.
pub fn level_for(verbose: bool, quiet: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::INFO
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool, quiet: bool) {
    INIT.call_once(|| {
        let level = level_for(verbose, quiet);

        let filter = if env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(format!("neurondoc={}", level))
        };

        // Another subscriber may already be installed (tests).
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init();
    });
}
