use crate::item::ItemHandle;
use crate::stats::{Attribute, DamageReport, LevelUpReport};

/// What an applied [`InputAction`](super::InputAction) changed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionOutcome {
    Damaged(DamageReport),
    Healed {
        restored: f32,
    },
    ArmorHealed {
        restored: f32,
    },
    StaminaSpent {
        spent: f32,
    },
    StaminaRegained {
        gained: f32,
    },
    ExperienceGained {
        amount: f32,
        report: LevelUpReport,
    },
    /// A movement mode changed; the host should apply the new walk speed.
    MovementChanged {
        max_walk_speed: f32,
    },
    PunchChanged {
        punching: bool,
    },
    OverlapChanged {
        item: Option<ItemHandle>,
    },
    PickedUp {
        item: ItemHandle,
    },
    Equipped {
        item: ItemHandle,
        previous: Option<ItemHandle>,
    },
    AttributeRaised {
        attribute: Attribute,
        value: u32,
    },
    /// The action was valid but had nothing to act on.
    Nothing,
}

impl ActionOutcome {
    /// Returns true if the outcome leveled the character up.
    pub fn leveled_up(&self) -> bool {
        matches!(self, Self::ExperienceGained { report, .. } if report.leveled_up())
    }
}
