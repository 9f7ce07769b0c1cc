//! Game configuration
//!
//! Timings and limits for a session, loadable from a TOML file. Every field
//! has a default, so a partial file only overrides what it names.

use crate::core::WORD_LENGTH;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Session limits and reveal timings
///
/// All durations are in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Guesses allowed before the session is lost
    pub max_guesses: usize,
    /// Delay between the start of consecutive tile flips
    pub reveal_stride_ms: u64,
    /// Offset between the three phases of one tile flip
    pub flip_phase_ms: u64,
    /// Extra wait after the last tile before the row is finalized
    pub reveal_buffer_ms: u64,
    /// How long the win/loss state is shown before the session ends
    pub end_delay_ms: u64,
    /// Interval at which the oldest message is evicted
    pub message_tick_ms: u64,
    /// How long a rejected row shakes
    pub shake_ms: u64,
    /// How long a freshly typed tile is highlighted
    pub pop_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: 6,
            reveal_stride_ms: 300,
            flip_phase_ms: 300,
            reveal_buffer_ms: 300,
            end_delay_ms: 2000,
            message_tick_ms: 300,
            shake_ms: 500,
            pop_ms: 100,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file and validate it
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or holds
    /// values the engine cannot run with.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml(&raw)?;
        tracing::debug!(path = %path.display(), ?config, "loaded game config");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML, unknown keys, or invalid values.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall or break a session
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_guesses == 0 {
            return Err(ConfigError::Invalid("max_guesses must be at least 1"));
        }
        if self.reveal_stride_ms == 0 {
            return Err(ConfigError::Invalid("reveal_stride_ms must be positive"));
        }
        if self.message_tick_ms == 0 {
            return Err(ConfigError::Invalid("message_tick_ms must be positive"));
        }
        if self.last_settle_offset() > self.finalize_offset() {
            return Err(ConfigError::Invalid(
                "flip_phase_ms too long: the last tile would still be flipping at finalize",
            ));
        }
        Ok(())
    }

    /// Offset from submission at which the row is scored and committed
    #[must_use]
    pub fn finalize_offset(&self) -> Duration {
        self.reveal_stride() * WORD_LENGTH as u32 + self.reveal_buffer()
    }

    /// Offset at which the last tile finishes its flip
    #[must_use]
    pub fn last_settle_offset(&self) -> Duration {
        self.reveal_stride() * (WORD_LENGTH as u32 - 1) + self.flip_phase() * 2
    }

    #[must_use]
    pub const fn reveal_stride(&self) -> Duration {
        Duration::from_millis(self.reveal_stride_ms)
    }

    #[must_use]
    pub const fn flip_phase(&self) -> Duration {
        Duration::from_millis(self.flip_phase_ms)
    }

    #[must_use]
    pub const fn reveal_buffer(&self) -> Duration {
        Duration::from_millis(self.reveal_buffer_ms)
    }

    #[must_use]
    pub const fn end_delay(&self) -> Duration {
        Duration::from_millis(self.end_delay_ms)
    }

    #[must_use]
    pub const fn message_tick(&self) -> Duration {
        Duration::from_millis(self.message_tick_ms)
    }

    #[must_use]
    pub const fn shake(&self) -> Duration {
        Duration::from_millis(self.shake_ms)
    }

    #[must_use]
    pub const fn pop(&self) -> Duration {
        Duration::from_millis(self.pop_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_timings() {
        let config = GameConfig::default();
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.reveal_stride(), Duration::from_millis(300));
        assert_eq!(config.reveal_buffer(), Duration::from_millis(300));
        assert_eq!(config.end_delay(), Duration::from_millis(2000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = GameConfig::from_toml("max_guesses = 8\nend_delay_ms = 500\n").unwrap();
        assert_eq!(config.max_guesses, 8);
        assert_eq!(config.end_delay_ms, 500);
        assert_eq!(config.reveal_stride_ms, 300);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(GameConfig::from_toml("").unwrap(), GameConfig::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(matches!(
            GameConfig::from_toml("max_guessez = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn zero_guesses_is_invalid() {
        assert!(matches!(
            GameConfig::from_toml("max_guesses = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn zero_message_tick_is_invalid() {
        assert!(matches!(
            GameConfig::from_toml("message_tick_ms = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn flip_outlasting_finalize_is_invalid() {
        assert!(matches!(
            GameConfig::from_toml("flip_phase_ms = 1000"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn last_settle_may_coincide_with_finalize() {
        let config = GameConfig::default();
        assert_eq!(config.last_settle_offset(), Duration::from_millis(1800));
        assert_eq!(config.finalize_offset(), Duration::from_millis(1800));
        assert!(GameConfig::from_toml("flip_phase_ms = 300").is_ok());
        assert!(GameConfig::from_toml("flip_phase_ms = 301").is_err());
    }

    #[test]
    fn missing_file_is_read_error() {
        assert!(matches!(
            GameConfig::load("/definitely/not/here/game.toml"),
            Err(ConfigError::Read { .. })
        ));
    }
}
