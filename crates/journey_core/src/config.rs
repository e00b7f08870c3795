//! Core runtime configuration.
//!
//! # Responsibility
//! - Resolve logging and session bootstrap options from the environment.
//! - Keep defaults in one place for FFI and CLI callers.
//!
//! # Invariants
//! - Blank or missing values fall back to defaults.
//! - An unrecognized log level is reported instead of silently replaced.

use crate::logging::{default_log_level, normalize_level};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "JOURNEY_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "JOURNEY_LOG_DIR";
pub const ENV_SEED_SAMPLES: &str = "JOURNEY_SEED_SAMPLES";

/// Options consumed at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Normalized level (`trace|debug|info|warn|error`).
    pub log_level: &'static str,
    /// Absolute log directory; `None` leaves file logging disabled.
    pub log_dir: Option<PathBuf>,
    /// Whether new sessions start with the sample notes.
    pub seed_sample_notes: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            seed_sample_notes: true,
        }
    }
}

impl CoreConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`.
    ///
    /// # Errors
    /// - Returns an error for an unsupported log level.
    /// - Returns an error for an unparseable seed flag.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut config = Self::default();

        if let Some(level) = non_blank(lookup(ENV_LOG_LEVEL)) {
            config.log_level = normalize_level(&level)?;
        }
        if let Some(dir) = non_blank(lookup(ENV_LOG_DIR)) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(flag) = non_blank(lookup(ENV_SEED_SAMPLES)) {
            config.seed_sample_notes = parse_flag(&flag)
                .ok_or_else(|| format!("invalid {ENV_SEED_SAMPLES} value `{flag}`"))?;
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
