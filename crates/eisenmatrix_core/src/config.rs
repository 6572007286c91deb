//! Runtime configuration for board front ends.
//!
//! # Responsibility
//! - Resolve database path, log directory, log level and locale tag.
//! - Apply precedence: explicit override, then environment, then default.
//!
//! # Invariants
//! - Blank values are treated as unset.
//! - Resolution never fails; unusable platform directories fall back to the
//!   system temp directory.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "EISENMATRIX_DB_PATH";
pub const LOG_DIR_ENV: &str = "EISENMATRIX_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "EISENMATRIX_LOG_LEVEL";
pub const LOCALE_ENV: &str = "EISENMATRIX_LOCALE";

const APP_DIR_NAME: &str = "eisenmatrix";
const DB_FILE_NAME: &str = "eisenmatrix.sqlite3";
const LOG_DIR_NAME: &str = "logs";

/// Values supplied by a front end (CLI flags, FFI arguments).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub db_path: Option<String>,
    pub log_dir: Option<String>,
    pub log_level: Option<String>,
    pub locale: Option<String>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
    /// Explicit locale tag; `None` means detect from the environment.
    pub locale: Option<String>,
}

impl BoardConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env(overrides: ConfigOverrides) -> Self {
        Self::resolve(overrides, |name| std::env::var(name).ok())
    }

    /// Resolves configuration using `lookup` for environment values.
    pub fn resolve(overrides: ConfigOverrides, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |explicit: Option<String>, env_name: &str| {
            non_blank(explicit).or_else(|| non_blank(lookup(env_name)))
        };

        let app_dir = app_data_dir();
        Self {
            db_path: pick(overrides.db_path, DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| app_dir.join(DB_FILE_NAME)),
            log_dir: pick(overrides.log_dir, LOG_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| app_dir.join(LOG_DIR_NAME)),
            log_level: pick(overrides.log_level, LOG_LEVEL_ENV)
                .unwrap_or_else(|| default_log_level().to_string()),
            locale: pick(overrides.locale, LOCALE_ENV),
        }
    }
}

fn app_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
