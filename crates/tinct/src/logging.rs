//! Subscriber setup for binaries and tests.
//!
//! Library crates only emit `tracing` events under the `tinct.*` targets
//! (`tinct.history`, `tinct.editor`, `tinct.palette`, `tinct.reorder`,
//! `tinct.drag`). Applications that do not install their own subscriber can
//! call [`init`] once at startup.
//!
//! The filter is read from `TINCT_LOG` using `EnvFilter` directive syntax,
//! e.g. `TINCT_LOG=tinct.history=debug,warn`. With the `tracing-json`
//! feature, events are written as JSON lines.

use tracing_subscriber::EnvFilter;

use crate::{Error, Result};

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "TINCT_LOG";

/// Directive used when `TINCT_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the filter from `TINCT_LOG`, falling back to [`DEFAULT_DIRECTIVE`].
#[must_use]
pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global fmt subscriber.
///
/// Fails if a global subscriber is already set.
pub fn try_init() -> Result<()> {
    let filter = filter_from_env();

    #[cfg(feature = "tracing-json")]
    let installed = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init();

    #[cfg(not(feature = "tracing-json"))]
    let installed = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    installed.map_err(|err| Error::Logging(err.to_string()))
}

/// [`try_init`], keeping an already-installed subscriber.
///
/// The rejected install is reported at `debug` on target `tinct.logging`.
pub fn init() {
    if let Err(err) = try_init() {
        tracing::debug!(target: "tinct.logging", %err, "keeping existing subscriber");
    }
}
