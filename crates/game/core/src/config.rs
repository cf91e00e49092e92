/// Game configuration constants and tunable parameters.
///
/// Runtime-tunable values cover what a single input press does (press
/// amounts) and the movement speeds reported to the host. Leveling rules are
/// compile-time constants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Damage applied by one `damage` press.
    pub damage_step: f32,
    /// Health restored by one `heal` press.
    pub heal_step: f32,
    /// Armor restored by one `heal_armor` press.
    pub armor_heal_step: f32,
    /// Stamina restored by one `stamina_add` press.
    pub stamina_regen_step: f32,
    /// Stamina consumed by one `stamina_minus` press.
    pub stamina_spend_step: f32,
    /// Movement speeds handed to the host's movement component.
    pub speeds: MovementSpeeds,
}

impl GameConfig {
    // ===== leveling =====
    pub const INITIAL_LEVEL: u32 = 1;
    pub const INITIAL_EXPERIENCE_THRESHOLD: f32 = 2000.0;
    /// Added to the threshold on every level-up.
    pub const EXPERIENCE_THRESHOLD_STEP: f32 = 500.0;
    /// Leveling stops here; leftover experience is discarded.
    pub const MAX_LEVEL: u32 = 99;

    // ===== attributes =====
    pub const INITIAL_ATTRIBUTE_VALUE: u32 = 1;
    pub const INITIAL_UPGRADE_POINTS: u32 = 5;
    pub const INITIAL_ATTACK_SPEED: f32 = 1.0;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PRESS_STEP: f32 = 0.02;

    pub fn new() -> Self {
        Self {
            damage_step: Self::DEFAULT_PRESS_STEP,
            heal_step: Self::DEFAULT_PRESS_STEP,
            armor_heal_step: Self::DEFAULT_PRESS_STEP,
            stamina_regen_step: Self::DEFAULT_PRESS_STEP,
            stamina_spend_step: Self::DEFAULT_PRESS_STEP,
            speeds: MovementSpeeds::default(),
        }
    }

    /// Uses the same amount for every press-driven resource change.
    pub fn with_press_step(step: f32) -> Self {
        Self {
            damage_step: step,
            heal_step: step,
            armor_heal_step: step,
            stamina_regen_step: step,
            stamina_spend_step: step,
            speeds: MovementSpeeds::default(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk speeds (engine units per second) for each movement mode.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementSpeeds {
    pub walk: f32,
    pub sprint: f32,
    /// Speed restored when sprinting stops.
    pub sprint_release: f32,
    pub zoomed: f32,
    /// Speed restored when zooming stops.
    pub zoom_release: f32,
}

impl Default for MovementSpeeds {
    fn default() -> Self {
        Self {
            walk: 500.0,
            sprint: 1500.0,
            sprint_release: 600.0,
            zoomed: 300.0,
            zoom_release: 600.0,
        }
    }
}
