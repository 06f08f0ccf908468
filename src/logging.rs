//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter expression.
pub const LOG_ENV: &str = "NILE_LOG";

const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Builds the log filter from an optional user expression.
///
/// An invalid expression is reported on stderr and replaced by the default.
pub fn build_filter(expression: Option<&str>, verbose: bool) -> EnvFilter {
    let fallback = default_directive(verbose);
    let Some(expression) = expression.filter(|e| !e.trim().is_empty()) else {
        return EnvFilter::new(fallback);
    };

    EnvFilter::try_new(expression).unwrap_or_else(|e| {
        eprintln!(
            "WARN: {LOG_ENV}='{expression}' is not a valid tracing filter ({e}); \
             falling back to '{fallback}'"
        );
        EnvFilter::new(fallback)
    })
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let expression = std::env::var(LOG_ENV).ok();
    let filter = build_filter(expression.as_deref(), verbose);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
