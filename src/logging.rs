//! Logging setup for the binary
//!
//! The library only emits `tracing` events; this installs the subscriber that
//! prints them to stderr.

use std::io::IsTerminal;
use std::sync::Once;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::config::LOG_ENV_VAR;

/// Install the stderr subscriber. `verbose` raises the default level from
/// `warn` to `debug`; `REJOIN_LOG` directives override both.
pub fn init(verbose: bool) {
    // Tests may call this more than once
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = env_filter(verbose, std::env::var(LOG_ENV_VAR).ok().as_deref());

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .init();
    });
}

fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

/// Build the filter from optional directives. Invalid directives are
/// ignored rather than aborting the command.
fn env_filter(verbose: bool, directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level(verbose).into())
        .parse_lossy(directives.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_follows_verbose() {
        assert_eq!(default_level(false), LevelFilter::WARN);
        assert_eq!(default_level(true), LevelFilter::DEBUG);
    }

    #[test]
    fn test_env_filter_defaults() {
        assert_eq!(env_filter(false, None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(env_filter(true, None).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_env_filter_uses_directives() {
        let filter = env_filter(false, Some("rejoin=trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_env_filter_ignores_garbage() {
        let filter = env_filter(false, Some("rejoin=notalevel"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
