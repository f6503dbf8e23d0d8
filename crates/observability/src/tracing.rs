//! Tracing/logging initialization.
//!
//! Logs are JSON lines on stderr. Stdout belongs to the interactive console,
//! so nothing here may write to it.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = build_filter(std::env::var("RUST_LOG").ok().as_deref(), DEFAULT_FILTER);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_filter(from_env: Option<&str>, default_filter: &str) -> EnvFilter {
    from_env
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_when_env_is_missing_or_blank() {
        assert_eq!(build_filter(None, "warn").to_string(), "warn");
        assert_eq!(build_filter(Some("  "), "info").to_string(), "info");
    }

    #[test]
    fn env_value_wins_when_valid() {
        assert_eq!(
            build_filter(Some("stockroom_infra=debug"), "warn").to_string(),
            "stockroom_infra=debug"
        );
    }

    #[test]
    fn repeated_init_is_harmless() {
        init();
        init();
    }
}
