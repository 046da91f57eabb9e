// crates/cli/src/logging.rs
//! Diagnostic logging on stderr.
//!
//! Silent unless `RUST_LOG` is set or `--verbose` is passed, so stdout stays
//! machine-readable.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use version_info_shared_kernel::{PresentationError, PresentationResult};

static INIT: Once = Once::new();

const VERBOSE_FILTER: &str = "version_info=debug,version_info_cli=debug,version_info_domain=debug";

fn default_filter(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { "off" }
}

/// Installs the global subscriber. Later calls are no-ops.
///
/// # Errors
/// Returns an error if the filter cannot be built or another global
/// subscriber is already installed.
pub fn init(verbose: bool) -> PresentationResult<()> {
    let mut result = Ok(());
    INIT.call_once(|| {
        result = try_install(verbose);
    });
    result
}

fn try_install(verbose: bool) -> PresentationResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(verbose)))
        .map_err(|err| PresentationError::LoggingInit(err.to_string()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true)
                .compact(),
        )
        .try_init()
        .map_err(|err| PresentationError::LoggingInit(err.to_string()))
}
