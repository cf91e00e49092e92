//! Core attributes and upgrade points.

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

/// Attribute that an upgrade point can be spent on.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Attribute {
    Strength,
    Dexterity,
    Intellect,
}

/// Strength, dexterity, intellect plus the points left to distribute.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub strength: u32,
    pub dexterity: u32,
    pub intellect: u32,
    pub upgrade_points: u32,
    /// Attack speed multiplier.
    pub attack_speed: f32,
}

impl Attributes {
    pub const fn new() -> Self {
        Self {
            strength: GameConfig::INITIAL_ATTRIBUTE_VALUE,
            dexterity: GameConfig::INITIAL_ATTRIBUTE_VALUE,
            intellect: GameConfig::INITIAL_ATTRIBUTE_VALUE,
            upgrade_points: GameConfig::INITIAL_UPGRADE_POINTS,
            attack_speed: GameConfig::INITIAL_ATTACK_SPEED,
        }
    }

    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Intellect => self.intellect,
        }
    }

    /// Spends one upgrade point on `attribute`. Returns the new value.
    pub fn allocate(&mut self, attribute: Attribute) -> Result<u32, AttributeError> {
        if self.upgrade_points == 0 {
            return Err(AttributeError::NoUpgradePoints { attribute });
        }
        self.upgrade_points -= 1;

        let slot = match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Intellect => &mut self.intellect,
        };
        *slot = slot.saturating_add(1);
        Ok(*slot)
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    #[error("no upgrade points left to raise {attribute}")]
    NoUpgradePoints { attribute: Attribute },
}

impl GameError for AttributeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoUpgradePoints { .. } => "no_upgrade_points",
        }
    }
}
