// logs.rs

use pmoconfig::Config;
use tracing::Level;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Initialise le logging
///
/// `RUST_LOG` est prioritaire ; sinon le niveau vient de
/// `host.logger.min_level`. La sortie console se fait sur stderr pour ne pas
/// se mêler au menu interactif.
pub fn init_logging(config: &Config) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = config
                .get_log_min_level()
                .ok()
                .and_then(|l| string_to_level(&l))
                .map(level_to_levelfilter)
                .unwrap_or(LevelFilter::WARN);
            EnvFilter::default().add_directive(level.into())
        }
    };

    let enable_console = config.get_log_enable_console().unwrap_or(true);

    let subscriber = tracing_subscriber::registry().with(filter);
    if enable_console {
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .init();
    } else {
        subscriber.init();
    }
}

fn string_to_level(s: &str) -> Option<Level> {
    match s.to_uppercase().as_str() {
        "ERROR" => Some(Level::ERROR),
        "WARN" => Some(Level::WARN),
        "INFO" => Some(Level::INFO),
        "DEBUG" => Some(Level::DEBUG),
        "TRACE" => Some(Level::TRACE),
        _ => None,
    }
}

fn level_to_levelfilter(level: Level) -> LevelFilter {
    match level {
        Level::ERROR => LevelFilter::ERROR,
        Level::WARN => LevelFilter::WARN,
        Level::INFO => LevelFilter::INFO,
        Level::DEBUG => LevelFilter::DEBUG,
        Level::TRACE => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_to_level() {
        assert_eq!(string_to_level("warn"), Some(Level::WARN));
        assert_eq!(string_to_level("Debug"), Some(Level::DEBUG));
        assert_eq!(string_to_level("verbose"), None);
    }

    #[test]
    fn test_level_to_levelfilter() {
        assert_eq!(level_to_levelfilter(Level::INFO), LevelFilter::INFO);
        assert_eq!(level_to_levelfilter(Level::TRACE), LevelFilter::TRACE);
    }
}
