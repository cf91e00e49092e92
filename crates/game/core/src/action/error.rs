use crate::error::{ErrorSeverity, GameError};
use crate::item::ItemHandle;
use crate::stats::{AmountError, AttributeError};

/// Why an input action could not be applied.
///
/// Rejected actions leave the character untouched.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    InvalidAmount(#[from] AmountError),

    #[error(transparent)]
    Attribute(#[from] AttributeError),

    #[error("item {0} is not defined")]
    UnknownItem(ItemHandle),

    #[error("item {0} is not in the inventory")]
    NotInInventory(ItemHandle),

    #[error("item {0} is not a weapon")]
    NotAWeapon(ItemHandle),

    #[error("item {item} requires level {required} (current level {current})")]
    LevelTooLow {
        item: ItemHandle,
        required: u32,
        current: u32,
    },

    #[error("item reward has no item attached")]
    RewardWithoutItem,
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidAmount(err) => err.severity(),
            Self::Attribute(err) => err.severity(),
            Self::LevelTooLow { .. } => ErrorSeverity::Recoverable,
            Self::UnknownItem(_)
            | Self::NotInInventory(_)
            | Self::NotAWeapon(_)
            | Self::RewardWithoutItem => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(err) => err.error_code(),
            Self::Attribute(err) => err.error_code(),
            Self::UnknownItem(_) => "unknown_item",
            Self::NotInInventory(_) => "not_in_inventory",
            Self::NotAWeapon(_) => "not_a_weapon",
            Self::LevelTooLow { .. } => "level_too_low",
            Self::RewardWithoutItem => "reward_without_item",
        }
    }
}
