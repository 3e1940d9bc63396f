//! Logging setup for the command-line front end.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with a default filter, overridable through RUST_LOG.
/// Output goes to stderr so stdout stays valid JSON.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Filter directive for a `--log-level` value. Unknown levels fall back to
/// `warn`; audit records are logged at `info` under their own target.
pub fn filter_for(level: &str) -> String {
    let level = match level {
        "trace" | "debug" | "info" | "warn" | "error" => level,
        _ => "warn",
    };
    format!("{},namematch::audit=info", level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for() {
        assert_eq!(filter_for("debug"), "debug,namematch::audit=info");
        assert_eq!(filter_for("loud"), "warn,namematch::audit=info");
    }
}
