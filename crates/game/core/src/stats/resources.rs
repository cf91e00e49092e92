//! Resources - bounded gauges owned by a character.
//!
//! Health, armor and stamina are unit-interval gauges (`0.0..=1.0`). Armor
//! sits in front of health: while the character is armored, damage drains
//! armor first and only the overflow reaches health.
//!
//! All operations are total. Results are clamped into range instead of being
//! rejected, and non-finite amounts leave the gauges untouched.

use super::amount::{GAUGE_MAX, clamp_gauge};

/// Whether damage currently hits armor or health.
///
/// `Armored → Unarmored` happens only when damage would push armor below
/// zero. `Unarmored → Armored` happens only through [`CharacterResources::heal_armor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ArmorState {
    Armored,
    Unarmored,
}

/// Current health, armor and stamina of a character.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterResources {
    health: f32,
    armor: f32,
    has_armor: bool,
    stamina: f32,
}

/// What a single damage application did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageReport {
    /// Armor removed by this hit.
    pub armor_absorbed: f32,
    /// Health removed by this hit (armor overflow or direct damage).
    pub health_lost: f32,
    /// True when this hit moved the character from armored to unarmored.
    pub armor_broken: bool,
}

impl DamageReport {
    /// Returns true if the hit changed nothing.
    pub fn is_empty(&self) -> bool {
        self.armor_absorbed == 0.0 && self.health_lost == 0.0 && !self.armor_broken
    }
}

impl CharacterResources {
    /// Fresh resources: every gauge full, armored.
    pub const fn new() -> Self {
        Self {
            health: GAUGE_MAX,
            armor: GAUGE_MAX,
            has_armor: true,
            stamina: GAUGE_MAX,
        }
    }

    /// Builds resources from explicit values, clamping each gauge.
    ///
    /// `has_armor` is taken as given; a character may be armored with an
    /// empty armor gauge (damage that lands exactly on zero keeps it armored).
    pub fn from_parts(health: f32, armor: f32, has_armor: bool, stamina: f32) -> Self {
        Self {
            health: sanitize(health, GAUGE_MAX),
            armor: sanitize(armor, GAUGE_MAX),
            has_armor,
            stamina: sanitize(stamina, GAUGE_MAX),
        }
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn armor(&self) -> f32 {
        self.armor
    }

    pub fn has_armor(&self) -> bool {
        self.has_armor
    }

    pub fn stamina(&self) -> f32 {
        self.stamina
    }

    pub fn armor_state(&self) -> ArmorState {
        if self.has_armor {
            ArmorState::Armored
        } else {
            ArmorState::Unarmored
        }
    }

    /// Health is at the floor. Nothing here reacts to it; that is left to
    /// whoever owns death handling.
    pub fn is_depleted(&self) -> bool {
        self.health <= 0.0
    }

    /// Applies damage, armor first.
    ///
    /// Armored: the amount is subtracted from armor. If armor would go
    /// negative, the negative remainder is added to health, armor drops to
    /// zero and the character becomes unarmored. Unarmored: the amount is
    /// subtracted from health directly.
    pub fn apply_damage(&mut self, amount: f32) -> DamageReport {
        if !amount.is_finite() {
            return DamageReport::default();
        }

        let (armor_before, health_before) = (self.armor, self.health);
        let mut armor_broken = false;

        if self.has_armor {
            let remaining = self.armor - amount;
            if remaining < 0.0 {
                self.health = clamp_gauge(self.health + remaining);
                self.armor = 0.0;
                self.has_armor = false;
                armor_broken = true;
            } else {
                self.armor = clamp_gauge(remaining);
            }
        } else {
            self.health = clamp_gauge(self.health - amount);
        }

        DamageReport {
            armor_absorbed: armor_before - self.armor,
            health_lost: health_before - self.health,
            armor_broken,
        }
    }

    /// Restores health up to the ceiling. Returns the change in health.
    pub fn apply_heal(&mut self, amount: f32) -> f32 {
        if !amount.is_finite() {
            return 0.0;
        }
        let before = self.health;
        self.health = clamp_gauge(self.health + amount);
        self.health - before
    }

    /// Restores armor up to the ceiling and re-arms the character.
    ///
    /// `has_armor` becomes true even for a zero amount.
    pub fn heal_armor(&mut self, amount: f32) -> f32 {
        if !amount.is_finite() {
            return 0.0;
        }
        let before = self.armor;
        self.armor = clamp_gauge(self.armor + amount);
        self.has_armor = true;
        self.armor - before
    }

    /// Consumes stamina, flooring at zero. Never refuses.
    ///
    /// Returns the stamina actually removed.
    pub fn spend_stamina(&mut self, amount: f32) -> f32 {
        if !amount.is_finite() {
            return 0.0;
        }
        let before = self.stamina;
        self.stamina = clamp_gauge(self.stamina - amount);
        before - self.stamina
    }

    /// Restores stamina up to the ceiling. Returns the stamina gained.
    pub fn regen_stamina(&mut self, amount: f32) -> f32 {
        if !amount.is_finite() {
            return 0.0;
        }
        let before = self.stamina;
        self.stamina = clamp_gauge(self.stamina + amount);
        self.stamina - before
    }
}

impl Default for CharacterResources {
    fn default() -> Self {
        Self::new()
    }
}

fn sanitize(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        clamp_gauge(value)
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_range(resources: &CharacterResources) {
        for value in [resources.health(), resources.armor(), resources.stamina()] {
            assert!((0.0..=1.0).contains(&value), "gauge out of range: {value}");
        }
    }

    #[test]
    fn starts_full_and_armored() {
        let resources = CharacterResources::new();
        assert_eq!(resources.health(), 1.0);
        assert_eq!(resources.armor(), 1.0);
        assert_eq!(resources.stamina(), 1.0);
        assert!(resources.has_armor());
        assert_eq!(resources.armor_state(), ArmorState::Armored);
    }

    #[test]
    fn damage_within_armor_only_drains_armor() {
        let mut resources = CharacterResources::new();
        let report = resources.apply_damage(0.5);

        assert_eq!(resources.armor(), 0.5);
        assert_eq!(resources.health(), 1.0);
        assert!(resources.has_armor());
        assert_eq!(report.armor_absorbed, 0.5);
        assert_eq!(report.health_lost, 0.0);
        assert!(!report.armor_broken);
    }

    #[test]
    fn armor_overflow_reaches_health() {
        let mut resources = CharacterResources::new();
        let report = resources.apply_damage(1.5);

        assert_eq!(resources.armor(), 0.0);
        assert_eq!(resources.health(), 0.5);
        assert!(!resources.has_armor());
        assert!(report.armor_broken);
        assert_eq!(report.armor_absorbed, 1.0);
        assert_eq!(report.health_lost, 0.5);
    }

    #[test]
    fn unarmored_damage_floors_health_at_zero() {
        let mut resources = CharacterResources::new();
        resources.apply_damage(1.5);
        let report = resources.apply_damage(1.5);

        assert_eq!(resources.health(), 0.0);
        assert_eq!(resources.armor(), 0.0);
        assert!(!resources.has_armor());
        assert!(resources.is_depleted());
        assert_eq!(report.health_lost, 0.5);
        assert!(!report.armor_broken);
    }

    #[test]
    fn overflow_larger_than_health_floors_at_zero() {
        let mut resources = CharacterResources::new();
        resources.apply_damage(5.0);
        assert_eq!(resources.health(), 0.0);
        assert_eq!(resources.armor(), 0.0);
    }

    #[test]
    fn damage_landing_exactly_on_zero_armor_keeps_armored() {
        let mut resources = CharacterResources::new();
        resources.apply_damage(1.0);
        assert_eq!(resources.armor(), 0.0);
        assert!(resources.has_armor());

        // Next hit overflows entirely into health.
        resources.apply_damage(0.25);
        assert_eq!(resources.health(), 0.75);
        assert!(!resources.has_armor());
    }

    #[test]
    fn heal_armor_rearms_after_break() {
        let mut resources = CharacterResources::new();
        resources.apply_damage(1.5);
        let restored = resources.heal_armor(0.3);

        assert_eq!(resources.armor(), 0.3);
        assert!(resources.has_armor());
        assert_eq!(restored, 0.3);
    }

    #[test]
    fn heal_armor_caps_at_one() {
        let mut resources = CharacterResources::new();
        resources.apply_damage(0.25);
        resources.heal_armor(10.0);
        assert_eq!(resources.armor(), 1.0);
    }

    #[test]
    fn heal_caps_at_one_and_leaves_armor() {
        let mut resources = CharacterResources::new();
        resources.apply_damage(1.5);
        let restored = resources.apply_heal(0.75);

        assert_eq!(resources.health(), 1.0);
        assert_eq!(restored, 0.5);
        assert_eq!(resources.armor(), 0.0);
        assert!(!resources.has_armor());
    }

    #[test]
    fn stamina_floors_and_caps() {
        let mut resources = CharacterResources::new();
        assert_eq!(resources.spend_stamina(1000.0), 1.0);
        assert_eq!(resources.stamina(), 0.0);

        resources.regen_stamina(0.25);
        assert_eq!(resources.stamina(), 0.25);

        resources.regen_stamina(1000.0);
        assert_eq!(resources.stamina(), 1.0);
    }

    #[test]
    fn zero_amounts_are_idempotent() {
        let mut resources = CharacterResources::new();
        resources.apply_damage(0.5);
        let snapshot = resources.clone();

        assert!(resources.apply_damage(0.0).is_empty());
        assert_eq!(resources, snapshot);

        resources.heal_armor(0.0);
        assert_eq!(resources, snapshot);
    }

    #[test]
    fn zero_armor_heal_forces_armored() {
        let mut resources = CharacterResources::new();
        resources.apply_damage(1.5);
        resources.heal_armor(0.0);

        assert!(resources.has_armor());
        assert_eq!(resources.armor(), 0.0);
        assert_eq!(resources.health(), 0.5);
    }

    #[test]
    fn non_finite_amounts_are_ignored() {
        let mut resources = CharacterResources::new();
        resources.apply_damage(f32::NAN);
        resources.apply_heal(f32::INFINITY);
        resources.spend_stamina(f32::NEG_INFINITY);
        assert_eq!(resources, CharacterResources::new());
    }

    #[test]
    fn negative_amounts_stay_in_range() {
        let mut resources = CharacterResources::new();
        resources.apply_damage(1.5);
        resources.apply_damage(-3.0);
        resources.spend_stamina(-2.0);
        resources.apply_heal(-4.0);
        resources.heal_armor(-1.0);
        assert_in_range(&resources);
    }

    #[test]
    fn gauges_stay_in_range_over_mixed_sequence() {
        let mut resources = CharacterResources::new();
        let amounts = [0.0, 0.02, 0.3, 0.75, 1.0, 1.5, 3.0];

        for (step, amount) in amounts.iter().cycle().take(70).enumerate() {
            match step % 5 {
                0 => {
                    resources.apply_damage(*amount);
                }
                1 => {
                    resources.apply_heal(*amount);
                }
                2 => {
                    resources.heal_armor(*amount);
                }
                3 => {
                    resources.spend_stamina(*amount);
                }
                _ => {
                    resources.regen_stamina(*amount);
                }
            }
            assert_in_range(&resources);
        }
    }

    #[test]
    fn from_parts_clamps() {
        let resources = CharacterResources::from_parts(2.0, -1.0, false, f32::NAN);
        assert_eq!(resources.health(), 1.0);
        assert_eq!(resources.armor(), 0.0);
        assert_eq!(resources.stamina(), 1.0);
        assert_eq!(resources.armor_state(), ArmorState::Unarmored);
    }
}
