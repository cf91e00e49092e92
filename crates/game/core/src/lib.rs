//! Deterministic character rules and gameplay data shared by hosts.
//!
//! `rpg-core` defines the character resource model (health, armor, stamina,
//! experience and leveling), the passive gameplay records around it
//! (inventory, items, quests, enemies) and the binding from decoded input
//! actions to character operations. It performs no I/O; hosts feed it
//! [`InputAction`]s and read back [`CharacterStatus`] snapshots.
pub mod action;
pub mod character;
pub mod config;
pub mod enemy;
pub mod error;
pub mod inventory;
pub mod item;
pub mod quest;
pub mod stats;

pub use action::{ActionArgument, ActionError, ActionOutcome, InputAction, InputActionKind};
pub use character::{Character, CharacterFlags, CharacterStatus};
pub use config::{GameConfig, MovementSpeeds};
pub use enemy::Enemy;
pub use error::{ErrorSeverity, GameError};
pub use inventory::Inventory;
pub use item::{
    ItemCatalog, ItemDefinition, ItemHandle, ItemKind, ItemOracle, WeaponData, WeaponKind,
};
pub use quest::{ClearCondition, Objective, Quest, QuestError, Reward, RewardKind};
pub use stats::{
    Amount, AmountError, ArmorState, Attribute, AttributeError, Attributes, CharacterResources,
    DamageReport, LevelUpReport, Progression,
};
