//! Experience and leveling.
//!
//! Experience accumulates linearly. Every time it reaches the current
//! threshold, the threshold is paid out of the pool, the threshold grows by
//! [`GameConfig::EXPERIENCE_THRESHOLD_STEP`] and the level goes up by one.
//! A single gain may cross several thresholds; each is paid in turn.

use crate::config::GameConfig;

/// Level, experience pool and the cost of the next level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progression {
    level: u32,
    experience: f32,
    experience_threshold: f32,
}

/// Result of a single experience gain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUpReport {
    pub levels_gained: u32,
    pub new_level: u32,
    /// The gain hit the level cap and the rest of the pool was dropped.
    pub capped: bool,
}

impl LevelUpReport {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

impl Progression {
    pub const fn new() -> Self {
        Self {
            level: GameConfig::INITIAL_LEVEL,
            experience: 0.0,
            experience_threshold: GameConfig::INITIAL_EXPERIENCE_THRESHOLD,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> f32 {
        self.experience
    }

    pub fn experience_threshold(&self) -> f32 {
        self.experience_threshold
    }

    /// Experience still missing for the next level.
    pub fn experience_to_next_level(&self) -> f32 {
        self.experience_threshold - self.experience
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= GameConfig::MAX_LEVEL
    }

    /// Adds experience and pays out every threshold it covers.
    ///
    /// Non-finite amounts are ignored; negative amounts drain the pool down
    /// to zero but never remove levels.
    pub fn gain_experience(&mut self, amount: f32) -> LevelUpReport {
        let start_level = self.level;

        if !amount.is_finite() || self.is_max_level() {
            return self.report(start_level, self.is_max_level() && amount > 0.0);
        }

        self.experience = (self.experience + amount).max(0.0);

        while self.experience >= self.experience_threshold {
            if self.is_max_level() {
                break;
            }
            self.experience -= self.experience_threshold;
            self.experience_threshold += GameConfig::EXPERIENCE_THRESHOLD_STEP;
            self.level += 1;
        }

        let capped = self.is_max_level();
        if capped {
            self.experience = 0.0;
        }

        self.report(start_level, capped)
    }

    fn report(&self, start_level: u32, capped: bool) -> LevelUpReport {
        LevelUpReport {
            levels_gained: self.level - start_level,
            new_level: self.level,
            capped,
        }
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}
