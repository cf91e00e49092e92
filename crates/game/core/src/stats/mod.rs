//! Stat System - character gauges, progression and attributes.
//!
//! ```text
//! [ Amount ]        validated input at the boundary
//!      ↓
//! [ Resources ]     health / armor / stamina, clamped to 0.0..=1.0
//! [ Progression ]   experience, threshold, level
//! [ Attributes ]    strength / dexterity / intellect, upgrade points
//! ```
//!
//! ## Principles
//!
//! 1. **Total operations**: values are clamped, never rejected
//! 2. **Deterministic**: pure functions, no I/O or randomness
//! 3. **Owned values**: every block is a plain value owned by one character

pub mod amount;
pub mod attributes;
pub mod progression;
pub mod resources;

// Re-export primary types
pub use amount::{Amount, AmountError, GAUGE_MAX, GAUGE_MIN, clamp_gauge};
pub use attributes::{Attribute, AttributeError, Attributes};
pub use progression::{LevelUpReport, Progression};
pub use resources::{ArmorState, CharacterResources, DamageReport};
