//! Difficulty to Playback Speed Policy
//!
//! Playback gets faster as the sequence grows. The difficulty axis is split
//! into three tiers by two breakpoints; the concrete delay of each tier is
//! owned by [`crate::config::TimingConfig`].

use serde::{Deserialize, Serialize};

/// Default difficulty at which playback switches to [`SpeedTier::Medium`]
pub const DEFAULT_MEDIUM_FROM: usize = 13;
/// Default difficulty at which playback switches to [`SpeedTier::Fast`]
pub const DEFAULT_FAST_FROM: usize = 26;

/// Coarse playback pacing bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedTier {
    /// Longest highlight
    Slow,
    /// Intermediate highlight
    Medium,
    /// Shortest highlight
    Fast,
}

impl SpeedTier {
    /// Tier rank, 0 for the slowest. Higher rank never means a longer delay.
    pub fn rank(self) -> u8 {
        match self {
            SpeedTier::Slow => 0,
            SpeedTier::Medium => 1,
            SpeedTier::Fast => 2,
        }
    }
}

/// Breakpoints mapping difficulty to [`SpeedTier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedPolicy {
    /// First difficulty played at medium speed
    pub medium_from: usize,
    /// First difficulty played at fast speed
    pub fast_from: usize,
}

impl SpeedPolicy {
    /// Create a policy with explicit breakpoints
    pub fn new(medium_from: usize, fast_from: usize) -> Self {
        SpeedPolicy {
            medium_from,
            fast_from,
        }
    }

    /// Tier for the given difficulty
    pub fn speed_for(&self, difficulty: usize) -> SpeedTier {
        if difficulty >= self.fast_from {
            SpeedTier::Fast
        } else if difficulty >= self.medium_from {
            SpeedTier::Medium
        } else {
            SpeedTier::Slow
        }
    }
}

impl Default for SpeedPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MEDIUM_FROM, DEFAULT_FAST_FROM)
    }
}

/// Tier for the given difficulty under the default breakpoints (13, 26)
pub fn speed_for(difficulty: usize) -> SpeedTier {
    SpeedPolicy::default().speed_for(difficulty)
}
