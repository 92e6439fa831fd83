//! Game Configuration
//!
//! Tunables that the firmware hard-coded: sequence capacity, the start pad,
//! the speed breakpoints and the concrete delays behind each pacing step.
//! Every field has a default, so a configuration file only needs the values
//! it overrides.

pub mod loader;

pub use loader::ConfigLoader;

use crate::sequence::DEFAULT_CAPACITY;
use crate::speed::{SpeedPolicy, SpeedTier};
use crate::symbol::Symbol;
use crate::{Result, SimonError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Concrete pacing delays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Highlight delay at [`SpeedTier::Slow`]
    pub slow_ms: u64,
    /// Highlight delay at [`SpeedTier::Medium`]
    pub medium_ms: u64,
    /// Highlight delay at [`SpeedTier::Fast`]
    pub fast_ms: u64,
    /// Hold of each countdown frame
    pub countdown_step_ms: u64,
    /// Hold of the win and loss screens
    pub message_hold_ms: u64,
    /// How long a pressed pad stays lit
    pub press_feedback_ms: u64,
}

impl TimingConfig {
    /// Delay for one highlight phase (LED on, or LED off) at `tier`
    pub fn tier_delay(&self, tier: SpeedTier) -> Duration {
        let ms = match tier {
            SpeedTier::Slow => self.slow_ms,
            SpeedTier::Medium => self.medium_ms,
            SpeedTier::Fast => self.fast_ms,
        };
        Duration::from_millis(ms)
    }

    /// Wall time to play back `length` symbols at `tier` (lit + dark per symbol)
    pub fn playback_duration(&self, length: usize, tier: SpeedTier) -> Duration {
        let phases = u32::try_from(length.saturating_mul(2)).unwrap_or(u32::MAX);
        self.tier_delay(tier).saturating_mul(phases)
    }

    /// Hold of each countdown frame
    pub fn countdown_step(&self) -> Duration {
        Duration::from_millis(self.countdown_step_ms)
    }

    /// Hold of the win and loss screens
    pub fn message_hold(&self) -> Duration {
        Duration::from_millis(self.message_hold_ms)
    }

    /// How long a pressed pad stays lit
    pub fn press_feedback(&self) -> Duration {
        Duration::from_millis(self.press_feedback_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            slow_ms: 500,
            medium_ms: 250,
            fast_ms: 125,
            countdown_step_ms: 750,
            message_hold_ms: 1500,
            press_feedback_ms: 250,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Maximum sequence length; a correct sequence of this length wins
    pub capacity: usize,
    /// Pad that starts a game from the welcome screen
    pub start_symbol: Symbol,
    /// Difficulty breakpoints
    pub speed: SpeedPolicy,
    /// Concrete delays
    pub timing: TimingConfig,
}

impl GameConfig {
    /// Default configuration with a different capacity
    pub fn with_capacity(capacity: usize) -> Self {
        GameConfig {
            capacity,
            ..Self::default()
        }
    }

    /// Check the configuration for values the game cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(SimonError::ConfigError(
                "capacity must be at least 1".to_string(),
            ));
        }
        if self.speed.medium_from > self.speed.fast_from {
            return Err(SimonError::ConfigError(format!(
                "speed.medium_from ({}) must not exceed speed.fast_from ({})",
                self.speed.medium_from, self.speed.fast_from
            )));
        }
        let timing = &self.timing;
        if timing.slow_ms < timing.medium_ms || timing.medium_ms < timing.fast_ms {
            return Err(SimonError::ConfigError(format!(
                "tier delays must not increase with speed (slow {} / medium {} / fast {} ms)",
                timing.slow_ms, timing.medium_ms, timing.fast_ms
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            capacity: DEFAULT_CAPACITY,
            start_symbol: Symbol::X,
            speed: SpeedPolicy::default(),
            timing: TimingConfig::default(),
        }
    }
}
