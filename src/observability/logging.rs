//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Pick the filter from `RUST_LOG`, falling back to the configured level
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` always wins over the config file, unless it is blank or
//!   does not parse

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_directive(config: &ObservabilityConfig) -> String {
    format!(
        "advisor_gateway={level},tower_http={level}",
        level = config.log_level
    )
}

/// Select the filter: `env` (the `RUST_LOG` value) if usable, else the config.
pub fn env_filter(config: &ObservabilityConfig, env: Option<&str>) -> EnvFilter {
    env.filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(config)))
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init_logging(config: &ObservabilityConfig) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(env_filter(config, rust_log.as_deref()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    fn config(level: &str) -> ObservabilityConfig {
        ObservabilityConfig {
            log_level: level.into(),
        }
    }

    #[test]
    fn test_default_directive_uses_configured_level() {
        assert_eq!(
            default_directive(&config("debug")),
            "advisor_gateway=debug,tower_http=debug"
        );
    }

    #[test]
    fn test_rust_log_wins_over_config() {
        let filter = env_filter(&config("debug"), Some("warn"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_config_used_without_rust_log() {
        let filter = env_filter(&config("debug"), None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = env_filter(&config("error"), Some("  "));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_unparsable_rust_log_falls_back_to_config() {
        let filter = env_filter(&config("info"), Some("advisor_gateway=loudest"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
