//! Logging setup. Everything goes to stderr; stdout carries query answers.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "DICTRIE_LOG";

/// Pick the filter directive: `DICTRIE_LOG` wins, then the `-v` count,
/// then the configured default.
pub fn filter_directive(env: Option<String>, verbose: u8, configured: &str) -> String {
    if let Some(env) = env.filter(|e| !e.trim().is_empty()) {
        return env;
    }
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global stderr subscriber. Safe to call more than once; only
/// the first call takes effect.
pub fn init(verbose: u8, configured: &str) {
    let directive = filter_directive(std::env::var(LOG_ENV).ok(), verbose, configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
