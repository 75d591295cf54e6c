//! Logging setup for the `livesearch` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary. Output goes to stderr so rendered popovers on stdout stay
//! clean.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives, e.g. `livesearch=debug`.
pub const LOG_ENV: &str = "LIVESEARCH_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber. Calling it twice is harmless.
pub fn initialize(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("livesearch=debug")
	} else {
		EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
	};

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}
