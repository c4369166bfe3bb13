//! Configuration loading with env-var overrides.
//!
//! Reads the TOML file named by `KOOLKIT_CONFIG` (default
//! `config/default.toml`), then applies the `KOOLKIT_LOG_LEVEL` override.
//! Every section is optional; missing values fall back to the same defaults
//! the helpers use when called without a config.

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use tracing::debug;

use crate::error::KitError;
use crate::logger;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Polling defaults for [`crate::task::poll`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollConfig {
    pub timeout_ms: u64,
    pub interval_ms: u64,
}

/// Fully-resolved library configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct KitConfig {
    pub log_level: String,
    pub poll: PollConfig,
    /// Chunk size for [`crate::task::parallel`].
    pub parallel_threads: usize,
    /// Tick period for [`crate::task::record_animation_frames`].
    pub frame_interval_ms: u64,
    pub csv_delimiter: String,
    /// Iterations per closure in [`crate::func::most_performant`].
    pub bench_iterations: usize,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            poll: PollConfig {
                timeout_ms: default_poll_timeout_ms(),
                interval_ms: default_poll_interval_ms(),
            },
            parallel_threads: default_parallel_threads(),
            frame_interval_ms: default_frame_interval_ms(),
            csv_delimiter: default_csv_delimiter(),
            bench_iterations: default_bench_iterations(),
        }
    }
}

impl KitConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    kit: RawKit,
    #[serde(default)]
    poll: RawPoll,
    #[serde(default)]
    parallel: RawParallel,
    #[serde(default)]
    frames: RawFrames,
    #[serde(default)]
    csv: RawCsv,
    #[serde(default)]
    bench: RawBench,
}

#[derive(Deserialize)]
struct RawKit {
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Deserialize)]
struct RawPoll {
    #[serde(default = "default_poll_timeout_ms")]
    timeout_ms: u64,
    #[serde(default = "default_poll_interval_ms")]
    interval_ms: u64,
}

#[derive(Deserialize)]
struct RawParallel {
    #[serde(default = "default_parallel_threads")]
    threads: usize,
}

#[derive(Deserialize)]
struct RawFrames {
    #[serde(default = "default_frame_interval_ms")]
    interval_ms: u64,
}

#[derive(Deserialize)]
struct RawCsv {
    #[serde(default = "default_csv_delimiter")]
    delimiter: String,
}

#[derive(Deserialize)]
struct RawBench {
    #[serde(default = "default_bench_iterations")]
    iterations: usize,
}

impl Default for RawKit {
    fn default() -> Self {
        Self { log_level: default_log_level() }
    }
}

impl Default for RawPoll {
    fn default() -> Self {
        Self {
            timeout_ms: default_poll_timeout_ms(),
            interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Default for RawParallel {
    fn default() -> Self {
        Self { threads: default_parallel_threads() }
    }
}

impl Default for RawFrames {
    fn default() -> Self {
        Self { interval_ms: default_frame_interval_ms() }
    }
}

impl Default for RawCsv {
    fn default() -> Self {
        Self { delimiter: default_csv_delimiter() }
    }
}

impl Default for RawBench {
    fn default() -> Self {
        Self { iterations: default_bench_iterations() }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_poll_timeout_ms() -> u64 { 2000 }
fn default_poll_interval_ms() -> u64 { 100 }
fn default_parallel_threads() -> usize { 2 }
fn default_frame_interval_ms() -> u64 { 16 }
fn default_csv_delimiter() -> String { ",".to_string() }
fn default_bench_iterations() -> usize { 10_000 }

/// Load `.env` (if present), then the config file, then env-var overrides.
pub fn load() -> Result<KitConfig, KitError> {
    // .env is optional.
    let _ = dotenvy::dotenv();

    let path = env::var("KOOLKIT_CONFIG")
        .map(|p| expand_home(&p))
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
    let log_level_override = env::var("KOOLKIT_LOG_LEVEL").ok();
    load_from(&path, log_level_override.as_deref())
}

/// Internal loader — accepts an explicit path and optional override.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(path: &Path, log_level_override: Option<&str>) -> Result<KitConfig, KitError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| KitError::Config(format!("cannot read {}: {e}", path.display())))?;
    let cfg = parse(&raw, log_level_override)
        .map_err(|e| match e {
            KitError::Config(msg) => KitError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })?;
    debug!(path = %path.display(), log_level = %cfg.log_level, "config loaded");
    Ok(cfg)
}

/// Resolve a TOML document into a [`KitConfig`].
pub fn parse(raw: &str, log_level_override: Option<&str>) -> Result<KitConfig, KitError> {
    let parsed: RawConfig =
        toml::from_str(raw).map_err(|e| KitError::Config(format!("parse error: {e}")))?;

    let log_level = log_level_override.unwrap_or(&parsed.kit.log_level).to_string();
    logger::parse_level(&log_level)
        .map_err(|e| KitError::Config(format!("log_level: {e}")))?;

    if parsed.poll.interval_ms == 0 {
        return Err(KitError::Config("poll.interval_ms must be greater than zero".into()));
    }
    if parsed.frames.interval_ms == 0 {
        return Err(KitError::Config("frames.interval_ms must be greater than zero".into()));
    }
    if parsed.csv.delimiter.is_empty() {
        return Err(KitError::Config("csv.delimiter must not be empty".into()));
    }

    Ok(KitConfig {
        log_level,
        poll: PollConfig {
            timeout_ms: parsed.poll.timeout_ms,
            interval_ms: parsed.poll.interval_ms,
        },
        parallel_threads: parsed.parallel.threads,
        frame_interval_ms: parsed.frames.interval_ms,
        csv_delimiter: parsed.csv.delimiter,
        bench_iterations: parsed.bench.iterations,
    })
}

/// Expand a leading `~` to the user's home directory.
/// Absolute or relative paths without `~` are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
