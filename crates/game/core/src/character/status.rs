use super::CharacterFlags;
use crate::item::ItemHandle;
use crate::stats::ArmorState;

/// Read-only view of a character for UI and other systems.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterStatus {
    pub name: String,
    pub health: f32,
    pub armor: f32,
    pub has_armor: bool,
    pub stamina: f32,
    pub level: u32,
    pub experience: f32,
    pub experience_threshold: f32,
    pub upgrade_points: u32,
    pub max_walk_speed: f32,
    pub flags: CharacterFlags,
    pub equipped_weapon: Option<ItemHandle>,
    pub inventory_len: usize,
}

impl CharacterStatus {
    pub fn armor_state(&self) -> ArmorState {
        if self.has_armor {
            ArmorState::Armored
        } else {
            ArmorState::Unarmored
        }
    }
}

impl core::fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} | HP {:.2} | AR {:.2} ({}) | ST {:.2} | LV {} ({:.0}/{:.0} xp) | items {}",
            self.name,
            self.health,
            self.armor,
            self.armor_state(),
            self.stamina,
            self.level,
            self.experience,
            self.experience_threshold,
            self.inventory_len,
        )?;
        if let Some(weapon) = self.equipped_weapon {
            write!(f, " | weapon {weapon}")?;
        }
        if !self.flags.is_empty() {
            write!(f, " | {:?}", self.flags)?;
        }
        Ok(())
    }
}
