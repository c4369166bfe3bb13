//! Opt-in tracing output for koolkit's helpers.
//!
//! The helpers only emit `tracing` events. Applications that already run a
//! subscriber see them automatically; anything else can call [`init_from`]
//! with a loaded [`KitConfig`] to print them to stderr.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::KitConfig;
use crate::error::KitError;

/// Install a stderr subscriber filtered by `config.log_level`.
///
/// The configured level already carries the `KOOLKIT_LOG_LEVEL` override, so
/// it wins over `RUST_LOG`. `RUST_LOG` is used only when the configured
/// directive does not parse.
pub fn init_from(config: &KitConfig) -> Result<(), KitError> {
    install(config_filter(config)?)
}

/// Install a stderr subscriber for an explicit level or `EnvFilter` directive.
///
/// With `prefer_level`, `level` is tried before `RUST_LOG`; otherwise
/// `RUST_LOG` is tried first and `level` is the fallback.
pub fn init(level: &str, prefer_level: bool) -> Result<(), KitError> {
    install(build_filter(level, prefer_level)?)
}

fn config_filter(config: &KitConfig) -> Result<EnvFilter, KitError> {
    build_filter(&config.log_level, true)
}

fn build_filter(level: &str, prefer_level: bool) -> Result<EnvFilter, KitError> {
    let from_level = EnvFilter::try_new(level).map_err(|e| e.to_string());
    let from_env = EnvFilter::try_from_default_env().map_err(|e| format!("RUST_LOG: {e}"));
    let (primary, fallback) = if prefer_level {
        (from_level, from_env)
    } else {
        (from_env, from_level)
    };
    primary.or_else(|first| {
        fallback.map_err(|second| {
            KitError::Logger(format!("no usable filter for '{level}': {first}; {second}"))
        })
    })
}

fn install(filter: EnvFilter) -> Result<(), KitError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| KitError::Logger(format!("failed to set subscriber: {e}")))
}

/// Parse a plain level name. Config validation uses this, so only the five
/// levels and `off` are accepted, not full filter directives.
pub fn parse_level(level: &str) -> Result<LevelFilter, KitError> {
    if level.is_empty() {
        return Err(KitError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| KitError::Logger(format!("unrecognised log level: '{level}'")))
}
