//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `CALPRINT_FIRST_DAY_OF_WEEK` is unset, falls back to a file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! Whatever the source, the result is validated before it is returned.
//!
//! ## Environment Variables
//! - `CALPRINT_FIRST_DAY_OF_WEEK`: First day of the week (`mon`, `sunday`, ...)
//! - `CALPRINT_MIN_DAYS_IN_FIRST_WEEK`: Days of January week 1 must hold
//! - `CALPRINT_WORK_WEEK_FIRST_DAY`: First day of the work week
//! - `CALPRINT_WORK_WEEK_LAST_DAY`: Last day of the work week
//! - `CALPRINT_ENABLED_VIEWS`: Comma separated view identifiers
//! - `CALPRINT_FILL_DAY_MARKERS`: Emit fill-day markers (`1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off`)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./calprint.{json,toml}` or `./config.{json,toml}` (working directory)
//! 2. The same names in the parent and grandparent directory
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use calprint_domain::constants::{
    DEFAULT_MINIMAL_DAYS_IN_FIRST_WEEK, DEFAULT_WORK_WEEK_FIRST_DAY, DEFAULT_WORK_WEEK_LAST_DAY,
};
use calprint_domain::{CalPrintError, CalendarConfig, Config, PrintConfig, Result, ViewKind};
use chrono::Weekday;

const CONFIG_FILE_NAMES: [&str; 4] = ["calprint.json", "calprint.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If that fails, falls
/// back to loading from a config file.
///
/// # Errors
/// Returns `CalPrintError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - The loaded configuration fails validation
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Only `CALPRINT_FIRST_DAY_OF_WEEK` is required; everything else falls
/// back to its default.
///
/// # Errors
/// Returns `CalPrintError::Config` if the required variable is missing or
/// any variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let first_day_of_week =
        parse_weekday("CALPRINT_FIRST_DAY_OF_WEEK", &env_var("CALPRINT_FIRST_DAY_OF_WEEK")?)?;

    let minimal_days_in_first_week = match optional_env_var("CALPRINT_MIN_DAYS_IN_FIRST_WEEK") {
        Some(s) => s.trim().parse::<u8>().map_err(|e| {
            CalPrintError::Config(format!("Invalid minimal days in first week: {}", e))
        })?,
        None => DEFAULT_MINIMAL_DAYS_IN_FIRST_WEEK,
    };

    let work_week_first_day = match optional_env_var("CALPRINT_WORK_WEEK_FIRST_DAY") {
        Some(s) => parse_weekday("CALPRINT_WORK_WEEK_FIRST_DAY", &s)?,
        None => DEFAULT_WORK_WEEK_FIRST_DAY,
    };
    let work_week_last_day = match optional_env_var("CALPRINT_WORK_WEEK_LAST_DAY") {
        Some(s) => parse_weekday("CALPRINT_WORK_WEEK_LAST_DAY", &s)?,
        None => DEFAULT_WORK_WEEK_LAST_DAY,
    };

    let enabled_views = match optional_env_var("CALPRINT_ENABLED_VIEWS") {
        Some(s) => parse_views(&s)?,
        None => ViewKind::all(),
    };
    let fill_day_markers = env_bool("CALPRINT_FILL_DAY_MARKERS", false)?;

    let config = Config {
        calendar: CalendarConfig {
            first_day_of_week,
            minimal_days_in_first_week,
            work_week_first_day,
            work_week_last_day,
        },
        print: PrintConfig { enabled_views, fill_day_markers },
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `CalPrintError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The loaded configuration fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CalPrintError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            CalPrintError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CalPrintError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`); a path
/// without an extension is read as JSON.
///
/// # Errors
/// Returns `CalPrintError::Config` if format is invalid or parsing fails.
pub fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| CalPrintError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CalPrintError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(CalPrintError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
        candidates.extend(cwd.ancestors().skip(1).take(2).flat_map(candidates_in));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(|name| dir.join(name)).collect()
}

/// Get required environment variable
///
/// # Errors
/// Returns `CalPrintError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        CalPrintError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Optional environment variable; blank values count as unset.
fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
/// Unset or blank yields `default`.
fn env_bool(key: &str, default: bool) -> Result<bool> {
    let Some(value) = optional_env_var(key) else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CalPrintError::Config(format!("Invalid boolean in {}: {}", key, value))),
    }
}

fn parse_weekday(key: &str, value: &str) -> Result<Weekday> {
    value
        .trim()
        .parse::<Weekday>()
        .map_err(|_| CalPrintError::Config(format!("Invalid weekday in {}: {}", key, value)))
}

fn parse_views(value: &str) -> Result<Vec<ViewKind>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| name.parse::<ViewKind>().map_err(CalPrintError::Config))
        .collect()
}
