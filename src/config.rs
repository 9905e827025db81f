//! Configuration loading for the Azul ledger.
//!
//! Configuration follows a precedence chain:
//! 1. Environment variables (highest priority)
//! 2. User config (`~/.azul/config.toml`)
//! 3. Defaults (lowest priority)
//!
//! All configuration is optional. The reward and level tables default to the
//! shipped curriculum values, so the system runs with no config at all.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FailOpen, LedgerError, Result};
use crate::ledger::{LevelTable, RewardTable};

/// Main configuration struct.
///
/// The rule tables are configuration data: new reward amounts or level
/// thresholds are config edits, not code changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// XP rewards and bonus amounts.
    pub rewards: RewardTable,
    /// Level thresholds.
    pub levels: LevelTable,
}

impl Config {
    /// Load configuration with the full precedence chain.
    pub fn load() -> Self {
        let mut config = Self::load_user_config().unwrap_or_default();
        config.apply_env_overrides();
        config.validate();
        config
    }

    /// Load config with fail-open behavior.
    ///
    /// If loading fails for any reason, returns defaults.
    pub fn load_fail_open() -> Self {
        let result: Result<Self> = Ok(Self::load());
        result.fail_open_default("loading config")
    }

    /// Load user config from `~/.azul/config.toml`.
    fn load_user_config() -> Option<Config> {
        let home = azul_home()?;
        let config_path = home.join("config.toml");
        Self::load_from_file(&config_path).ok()
    }

    /// Load config from a specific file path.
    fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| LedgerError::storage(path, e))?;
        toml::from_str(&content).map_err(|e| LedgerError::config(e.to_string()))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        // AZUL_STREAK_BONUS
        if let Ok(val) = env::var("AZUL_STREAK_BONUS") {
            match val.parse::<u32>() {
                Ok(n) => self.rewards.daily_streak_bonus = n,
                Err(_) => eprintln!(
                    "Warning: Invalid AZUL_STREAK_BONUS value '{}'. \
                    Expected a non-negative integer. Using default '{}'.",
                    val, self.rewards.daily_streak_bonus
                ),
            }
        }

        // AZUL_PERFECT_BONUS
        if let Ok(val) = env::var("AZUL_PERFECT_BONUS") {
            match val.parse::<u32>() {
                Ok(n) => self.rewards.perfect_bonus = n,
                Err(_) => eprintln!(
                    "Warning: Invalid AZUL_PERFECT_BONUS value '{}'. \
                    Expected a non-negative integer. Using default '{}'.",
                    val, self.rewards.perfect_bonus
                ),
            }
        }

        // AZUL_FIRST_TRY_BONUS
        if let Ok(val) = env::var("AZUL_FIRST_TRY_BONUS") {
            match val.parse::<u32>() {
                Ok(n) => self.rewards.first_try_bonus = n,
                Err(_) => eprintln!(
                    "Warning: Invalid AZUL_FIRST_TRY_BONUS value '{}'. \
                    Expected a non-negative integer. Using default '{}'.",
                    val, self.rewards.first_try_bonus
                ),
            }
        }

        // AZUL_DEFAULT_REWARD
        if let Ok(val) = env::var("AZUL_DEFAULT_REWARD") {
            match val.parse::<u32>() {
                Ok(n) => self.rewards.default_reward = n,
                Err(_) => eprintln!(
                    "Warning: Invalid AZUL_DEFAULT_REWARD value '{}'. \
                    Expected a non-negative integer. Using default '{}'.",
                    val, self.rewards.default_reward
                ),
            }
        }
    }

    /// Reject unusable table overrides, falling back to defaults.
    fn validate(&mut self) {
        if !self.levels.is_valid() {
            eprintln!(
                "Warning: configured level thresholds are not ascending from zero. \
                Using defaults."
            );
            self.levels = LevelTable::default();
        }
    }

    /// Save configuration to the user config file.
    ///
    /// Writes to `~/.azul/config.toml` (or `$AZUL_HOME/config.toml`),
    /// creating the directory if needed. Uses atomic write (temp file +
    /// rename) for safety.
    pub fn save_user(&self) -> Result<()> {
        let home = azul_home().ok_or_else(|| {
            LedgerError::config("Could not determine config directory (no home directory)")
        })?;

        if !home.exists() {
            fs::create_dir_all(&home).map_err(|e| LedgerError::storage(&home, e))?;
        }

        let config_path = home.join("config.toml");

        let content =
            toml::to_string_pretty(self).map_err(|e| LedgerError::config(e.to_string()))?;

        let temp_path = home.join(".config.toml.tmp");
        fs::write(&temp_path, &content).map_err(|e| LedgerError::storage(&temp_path, e))?;

        fs::rename(&temp_path, &config_path).map_err(|e| LedgerError::storage(&config_path, e))?;

        Ok(())
    }
}

/// Get the Azul home directory.
///
/// Checks the `AZUL_HOME` environment variable first, then falls back to
/// `~/.azul`. Invalid values are ignored.
pub fn azul_home() -> Option<PathBuf> {
    if let Ok(home) = env::var("AZUL_HOME") {
        if home.is_empty() {
            tracing::warn!("AZUL_HOME is empty, using default");
        } else {
            let path = PathBuf::from(&home);
            if path.is_absolute() {
                return Some(path);
            }
            if let Ok(canonical) = path.canonicalize() {
                return Some(canonical);
            }
            tracing::warn!("AZUL_HOME is relative and doesn't exist, using as-is");
            return Some(path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        return Some(home.join(".azul"));
    }

    // Fallback for containerized/minimal environments without HOME
    let fallback_path = fallback_azul_home();
    tracing::warn!(
        "HOME not set, using fallback location: {}",
        fallback_path.display()
    );
    Some(fallback_path)
}

/// Get fallback home path when HOME is unavailable.
#[cfg(unix)]
fn fallback_azul_home() -> PathBuf {
    use std::os::unix::fs::MetadataExt;
    let uid = std::fs::metadata("/").map(|m| m.uid()).unwrap_or(0);
    PathBuf::from(format!("/tmp/azul-{}", uid))
}

/// Get fallback home path when HOME is unavailable.
#[cfg(not(unix))]
fn fallback_azul_home() -> PathBuf {
    std::env::temp_dir().join("azul")
}

/// Get the progress document path.
///
/// Returns `<azul_home>/progress.json`.
pub fn progress_path() -> Option<PathBuf> {
    azul_home().map(|h| h.join("progress.json"))
}
