//! Enemy health state.
//!
//! A standalone record for hosts that place damage targets in the world.
//! Nothing in the character model or the input bindings refers to it;
//! quest objectives name enemies by string only.

use crate::stats::amount::{GAUGE_MAX, clamp_gauge};

/// Health bookkeeping for an enemy that can be hit and killed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub name: String,
    health: f32,
    has_taken_damage: bool,
    is_dead: bool,
}

impl Enemy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: GAUGE_MAX,
            has_taken_damage: false,
            is_dead: false,
        }
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn has_taken_damage(&self) -> bool {
        self.has_taken_damage
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    /// Subtracts health, flooring at zero. Returns true if this hit killed
    /// the enemy. Hits on a dead enemy are ignored.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if self.is_dead || !amount.is_finite() {
            return false;
        }
        self.health = clamp_gauge(self.health - amount);
        self.has_taken_damage = true;
        if self.health <= 0.0 {
            self.is_dead = true;
        }
        self.is_dead
    }
}
