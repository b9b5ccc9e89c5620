//! Diagnostics setup
//!
//! Logs go to stderr so stdout stays reserved for the usage line and the
//! optional run summary.

use tracing::warn;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Filter directive for the given verbosity flags
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    match (verbose, quiet) {
        (_, true) => "error",
        (true, false) => "debug",
        (false, false) => "warn",
    }
}

/// Build the filter for `directive`, falling back to `fallback` when it does not parse.
///
/// Returns the parse error alongside so the caller can report it once logging is up.
pub fn build_filter(directive: &str, fallback: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(fallback), Some(err)),
    }
}

/// Install the global fmt subscriber.
///
/// An explicit `filter` (from `--log` / `WORDCOUNT_LOG`) wins over the flags.
/// An unparsable filter is replaced by the flag default and reported with `warn!`.
/// Calling this twice is harmless; the second install is ignored.
pub fn init(verbose: bool, quiet: bool, filter: Option<&str>) {
    let fallback = default_directive(verbose, quiet);
    let directive = filter.unwrap_or(fallback);
    let (env_filter, rejected) = build_filter(directive, fallback);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Some(err) = rejected {
        warn!(filter = directive, error = %err, fallback, "ignoring invalid log filter");
    }
}
