//! Application log setup
//!
//! Logs go to stderr so ndjson submissions on stdout stay clean. `RUST_LOG`
//! replaces the default filter entirely when it is set.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_DIRECTIVE: &str = "emotion_logger=info";

/// Build the filter from a `RUST_LOG` value, falling back to the default directive
pub fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .map(str::trim)
        .filter(|spec| !spec.is_empty())
        .and_then(|spec| match EnvFilter::try_new(spec) {
            Ok(filter) => Some(filter),
            Err(e) => {
                eprintln!("Ignoring invalid RUST_LOG '{}': {}", spec, e);
                None
            }
        })
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

pub fn init() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(rust_log.as_deref()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;

    fn enabled(filter: EnvFilter, level: Level) -> bool {
        let subscriber = tracing_subscriber::registry().with(filter);
        tracing::subscriber::with_default(subscriber, || {
            if level == Level::DEBUG {
                tracing::enabled!(target: "emotion_logger::form", Level::DEBUG)
            } else {
                tracing::enabled!(target: "emotion_logger::form", Level::INFO)
            }
        })
    }

    #[test]
    fn test_default_filter_is_info() {
        assert!(enabled(env_filter(None), Level::INFO));
        assert!(!enabled(env_filter(None), Level::DEBUG));
    }

    #[test]
    fn test_rust_log_debug_is_honored() {
        assert!(enabled(env_filter(Some("emotion_logger=debug")), Level::DEBUG));
    }

    #[test]
    fn test_empty_rust_log_uses_default() {
        assert!(enabled(env_filter(Some("  ")), Level::INFO));
        assert!(!enabled(env_filter(Some("")), Level::DEBUG));
    }
}
