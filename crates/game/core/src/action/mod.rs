//! Input actions and their results.
//!
//! The host decodes raw device input into [`InputAction`]s; the core never
//! sees keys or controllers. Each action is applied synchronously by
//! [`Character::dispatch`](crate::Character::dispatch) and produces an
//! [`ActionOutcome`] or an [`ActionError`].

mod error;
mod outcome;

pub use error::ActionError;
pub use outcome::ActionOutcome;

use crate::item::ItemHandle;
use crate::quest::Reward;
use crate::stats::{Amount, Attribute};

/// Discrete action delivered by the input layer.
///
/// Resource actions carry an optional amount. `None` means a plain button
/// press, which uses the matching step from [`GameConfig`](crate::GameConfig).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputAction {
    Damage(Option<Amount>),
    Heal(Option<Amount>),
    HealArmor(Option<Amount>),
    StaminaAdd(Option<Amount>),
    StaminaMinus(Option<Amount>),
    GainExperience(Amount),

    Sprint,
    StopSprinting,
    ZoomIn,
    StopZoom,
    Punch,
    StopPunch,

    /// The character started overlapping an item lying in the world.
    OverlapItem(ItemHandle),
    /// The character stopped overlapping any item.
    LeaveItem,
    /// Takes the overlapped item and wields it if it is a weapon.
    Equip,
    /// Puts an item straight into the inventory.
    PickUp(ItemHandle),
    /// Wields a weapon already carried in the inventory.
    Wield(ItemHandle),

    Allocate(Attribute),
    ClaimReward(Reward),
}

impl InputAction {
    pub fn kind(&self) -> InputActionKind {
        match self {
            Self::Damage(_) => InputActionKind::Damage,
            Self::Heal(_) => InputActionKind::Heal,
            Self::HealArmor(_) => InputActionKind::HealArmor,
            Self::StaminaAdd(_) => InputActionKind::StaminaAdd,
            Self::StaminaMinus(_) => InputActionKind::StaminaMinus,
            Self::GainExperience(_) => InputActionKind::GainExperience,
            Self::Sprint => InputActionKind::Sprint,
            Self::StopSprinting => InputActionKind::StopSprinting,
            Self::ZoomIn => InputActionKind::ZoomIn,
            Self::StopZoom => InputActionKind::StopZoom,
            Self::Punch => InputActionKind::Punch,
            Self::StopPunch => InputActionKind::StopPunch,
            Self::OverlapItem(_) => InputActionKind::OverlapItem,
            Self::LeaveItem => InputActionKind::LeaveItem,
            Self::Equip => InputActionKind::Equip,
            Self::PickUp(_) => InputActionKind::PickUp,
            Self::Wield(_) => InputActionKind::Wield,
            Self::Allocate(_) => InputActionKind::Allocate,
            Self::ClaimReward(_) => InputActionKind::ClaimReward,
        }
    }
}

/// Payload-free discriminant of [`InputAction`], used for parsing and logs.
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
pub enum InputActionKind {
    Damage,
    Heal,
    HealArmor,
    StaminaAdd,
    StaminaMinus,
    GainExperience,
    Sprint,
    StopSprinting,
    ZoomIn,
    StopZoom,
    Punch,
    StopPunch,
    OverlapItem,
    LeaveItem,
    Equip,
    PickUp,
    Wield,
    Allocate,
    ClaimReward,
}

impl InputActionKind {
    /// What the single argument of this action is, if it takes one.
    pub const fn argument(&self) -> ActionArgument {
        match self {
            Self::Damage | Self::Heal | Self::HealArmor | Self::StaminaAdd | Self::StaminaMinus => {
                ActionArgument::OptionalAmount
            }
            Self::GainExperience => ActionArgument::Amount,
            Self::OverlapItem | Self::PickUp | Self::Wield => ActionArgument::Item,
            Self::Allocate => ActionArgument::Attribute,
            Self::ClaimReward => ActionArgument::Quest,
            Self::Sprint
            | Self::StopSprinting
            | Self::ZoomIn
            | Self::StopZoom
            | Self::Punch
            | Self::StopPunch
            | Self::LeaveItem
            | Self::Equip => ActionArgument::None,
        }
    }
}

/// Shape of the argument an [`InputActionKind`] expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ActionArgument {
    None,
    OptionalAmount,
    Amount,
    Item,
    Attribute,
    Quest,
}
