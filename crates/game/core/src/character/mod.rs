//! The player character: owner of resources, progression and belongings.
//!
//! All mutation goes through [`Character::dispatch`] or the resource methods
//! that forward to [`CharacterResources`] and [`Progression`].

mod flags;
mod status;

pub use flags::CharacterFlags;
pub use status::CharacterStatus;

use crate::action::{ActionError, ActionOutcome, InputAction};
use crate::config::GameConfig;
use crate::inventory::Inventory;
use crate::item::{ItemHandle, ItemOracle};
use crate::quest::{Reward, RewardKind};
use crate::stats::{
    Amount, Attributes, CharacterResources, DamageReport, LevelUpReport, Progression,
};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    resources: CharacterResources,
    progression: Progression,
    pub attributes: Attributes,
    pub inventory: Inventory,
    equipped_weapon: Option<ItemHandle>,
    overlapping_item: Option<ItemHandle>,
    flags: CharacterFlags,
    max_walk_speed: f32,
}

impl Character {
    pub fn new(name: impl Into<String>, config: &GameConfig) -> Self {
        Self {
            name: name.into(),
            resources: CharacterResources::new(),
            progression: Progression::new(),
            attributes: Attributes::new(),
            inventory: Inventory::default(),
            equipped_weapon: None,
            overlapping_item: None,
            flags: CharacterFlags::empty(),
            max_walk_speed: config.speeds.walk,
        }
    }

    /// Sets the inventory weight limit (builder pattern).
    #[must_use]
    pub fn with_weight_limit(mut self, weight_limit: f32) -> Self {
        self.inventory.weight_limit = weight_limit;
        self
    }

    pub fn resources(&self) -> &CharacterResources {
        &self.resources
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn equipped_weapon(&self) -> Option<ItemHandle> {
        self.equipped_weapon
    }

    pub fn overlapping_item(&self) -> Option<ItemHandle> {
        self.overlapping_item
    }

    pub fn flags(&self) -> CharacterFlags {
        self.flags
    }

    pub fn max_walk_speed(&self) -> f32 {
        self.max_walk_speed
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn status(&self) -> CharacterStatus {
        CharacterStatus {
            name: self.name.clone(),
            health: self.resources.health(),
            armor: self.resources.armor(),
            has_armor: self.resources.has_armor(),
            stamina: self.resources.stamina(),
            level: self.progression.level(),
            experience: self.progression.experience(),
            experience_threshold: self.progression.experience_threshold(),
            upgrade_points: self.attributes.upgrade_points,
            max_walk_speed: self.max_walk_speed,
            flags: self.flags,
            equipped_weapon: self.equipped_weapon,
            inventory_len: self.inventory.len(),
        }
    }

    // ===== resource model =====

    pub fn apply_damage(&mut self, amount: f32) -> DamageReport {
        self.resources.apply_damage(amount)
    }

    pub fn apply_heal(&mut self, amount: f32) -> f32 {
        self.resources.apply_heal(amount)
    }

    pub fn heal_armor(&mut self, amount: f32) -> f32 {
        self.resources.heal_armor(amount)
    }

    pub fn spend_stamina(&mut self, amount: f32) -> f32 {
        self.resources.spend_stamina(amount)
    }

    pub fn regen_stamina(&mut self, amount: f32) -> f32 {
        self.resources.regen_stamina(amount)
    }

    pub fn gain_experience(&mut self, amount: f32) -> LevelUpReport {
        self.progression.gain_experience(amount)
    }

    // ===== belongings =====

    /// Appends an item to the inventory.
    pub fn add_to_inventory(&mut self, item: ItemHandle) {
        self.inventory.add(item);
    }

    /// Wields a weapon the character already carries.
    pub fn wield<O>(
        &mut self,
        item: ItemHandle,
        items: &O,
    ) -> Result<Option<ItemHandle>, ActionError>
    where
        O: ItemOracle + ?Sized,
    {
        if !self.inventory.contains(item) {
            return Err(ActionError::NotInInventory(item));
        }
        self.check_wieldable(item, items)?;
        Ok(self.equipped_weapon.replace(item))
    }

    /// Pays out a quest reward.
    pub fn claim_reward(&mut self, reward: &Reward) -> Result<ActionOutcome, ActionError> {
        match reward.kind {
            RewardKind::Experience => {
                let amount = Amount::new(reward.experience)?.get();
                Ok(ActionOutcome::ExperienceGained {
                    amount,
                    report: self.gain_experience(amount),
                })
            }
            RewardKind::Item => {
                let item = reward.item.ok_or(ActionError::RewardWithoutItem)?;
                self.add_to_inventory(item);
                Ok(ActionOutcome::PickedUp { item })
            }
            RewardKind::Default => Ok(ActionOutcome::Nothing),
        }
    }

    fn check_wieldable<O>(&self, item: ItemHandle, items: &O) -> Result<(), ActionError>
    where
        O: ItemOracle + ?Sized,
    {
        let definition = items
            .definition(item)
            .ok_or(ActionError::UnknownItem(item))?;
        let weapon = definition
            .as_weapon()
            .ok_or(ActionError::NotAWeapon(item))?;
        if self.level() < weapon.level_requirement {
            return Err(ActionError::LevelTooLow {
                item,
                required: weapon.level_requirement,
                current: self.level(),
            });
        }
        Ok(())
    }

    /// Takes the overlapped item; weapons are wielded on the spot.
    fn equip_overlapping<O>(&mut self, items: &O) -> Result<ActionOutcome, ActionError>
    where
        O: ItemOracle + ?Sized,
    {
        let Some(item) = self.overlapping_item else {
            return Ok(ActionOutcome::Nothing);
        };
        let definition = items
            .definition(item)
            .ok_or(ActionError::UnknownItem(item))?;

        if definition.as_weapon().is_none() {
            self.overlapping_item = None;
            self.add_to_inventory(item);
            return Ok(ActionOutcome::PickedUp { item });
        }

        self.check_wieldable(item, items)?;
        self.overlapping_item = None;
        self.add_to_inventory(item);
        let previous = self.equipped_weapon.replace(item);
        Ok(ActionOutcome::Equipped { item, previous })
    }

    // ===== input bindings =====

    /// Applies one input action.
    ///
    /// Rejected actions leave the character unchanged.
    pub fn dispatch<O>(
        &mut self,
        action: &InputAction,
        config: &GameConfig,
        items: &O,
    ) -> Result<ActionOutcome, ActionError>
    where
        O: ItemOracle + ?Sized,
    {
        let step = |amount: &Option<Amount>, press: f32| amount.map_or(press, Amount::get);

        let outcome = match action {
            InputAction::Damage(amount) => {
                ActionOutcome::Damaged(self.apply_damage(step(amount, config.damage_step)))
            }
            InputAction::Heal(amount) => ActionOutcome::Healed {
                restored: self.apply_heal(step(amount, config.heal_step)),
            },
            InputAction::HealArmor(amount) => ActionOutcome::ArmorHealed {
                restored: self.heal_armor(step(amount, config.armor_heal_step)),
            },
            InputAction::StaminaAdd(amount) => ActionOutcome::StaminaRegained {
                gained: self.regen_stamina(step(amount, config.stamina_regen_step)),
            },
            InputAction::StaminaMinus(amount) => ActionOutcome::StaminaSpent {
                spent: self.spend_stamina(step(amount, config.stamina_spend_step)),
            },
            InputAction::GainExperience(amount) => ActionOutcome::ExperienceGained {
                amount: amount.get(),
                report: self.gain_experience(amount.get()),
            },

            InputAction::Sprint => {
                self.flags.insert(CharacterFlags::SPRINTING);
                self.set_walk_speed(config.speeds.sprint)
            }
            InputAction::StopSprinting => {
                self.flags.remove(CharacterFlags::SPRINTING);
                self.set_walk_speed(config.speeds.sprint_release)
            }
            InputAction::ZoomIn => {
                self.flags.insert(CharacterFlags::ZOOMED);
                self.set_walk_speed(config.speeds.zoomed)
            }
            InputAction::StopZoom => {
                self.flags.remove(CharacterFlags::ZOOMED);
                self.set_walk_speed(config.speeds.zoom_release)
            }
            InputAction::Punch => {
                self.flags.insert(CharacterFlags::PUNCHING);
                ActionOutcome::PunchChanged { punching: true }
            }
            InputAction::StopPunch => {
                self.flags.remove(CharacterFlags::PUNCHING);
                ActionOutcome::PunchChanged { punching: false }
            }

            InputAction::OverlapItem(item) => {
                self.overlapping_item = Some(*item);
                ActionOutcome::OverlapChanged { item: Some(*item) }
            }
            InputAction::LeaveItem => {
                self.overlapping_item = None;
                ActionOutcome::OverlapChanged { item: None }
            }
            InputAction::Equip => self.equip_overlapping(items)?,
            InputAction::PickUp(item) => {
                self.add_to_inventory(*item);
                ActionOutcome::PickedUp { item: *item }
            }
            InputAction::Wield(item) => ActionOutcome::Equipped {
                item: *item,
                previous: self.wield(*item, items)?,
            },

            InputAction::Allocate(attribute) => ActionOutcome::AttributeRaised {
                attribute: *attribute,
                value: self.attributes.allocate(*attribute)?,
            },
            InputAction::ClaimReward(reward) => self.claim_reward(reward)?,
        };

        Ok(outcome)
    }

    fn set_walk_speed(&mut self, speed: f32) -> ActionOutcome {
        self.max_walk_speed = speed;
        ActionOutcome::MovementChanged {
            max_walk_speed: speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemCatalog, ItemDefinition, ItemKind, WeaponData, WeaponKind};
    use crate::stats::{Attribute, AttributeError};

    const TORCH: ItemHandle = ItemHandle(1);
    const SWORD: ItemHandle = ItemHandle(2);
    const GREATAXE: ItemHandle = ItemHandle(3);

    fn catalog() -> ItemCatalog {
        [
            ItemDefinition::new(TORCH, "Torch", 0.5, ItemKind::Misc),
            ItemDefinition::weapon(
                SWORD,
                "Iron Sword",
                3.0,
                WeaponData::new(WeaponKind::Sword, 1, 0.1, 1.0),
            ),
            ItemDefinition::weapon(
                GREATAXE,
                "Greataxe",
                8.0,
                WeaponData::new(WeaponKind::Axe, 3, 0.3, 0.6),
            ),
        ]
        .into_iter()
        .collect()
    }

    fn setup() -> (Character, GameConfig, ItemCatalog) {
        let config = GameConfig::default();
        (Character::new("Hero", &config), config, catalog())
    }

    fn amount(value: f32) -> Option<Amount> {
        Some(Amount::new(value).unwrap())
    }

    #[test]
    fn button_presses_use_configured_steps() {
        let (mut hero, _, items) = setup();
        let config = GameConfig::with_press_step(0.25);

        hero.dispatch(&InputAction::Damage(None), &config, &items).unwrap();
        assert_eq!(hero.resources().armor(), 0.75);

        hero.dispatch(&InputAction::StaminaMinus(None), &config, &items).unwrap();
        hero.dispatch(&InputAction::StaminaMinus(None), &config, &items).unwrap();
        hero.dispatch(&InputAction::StaminaAdd(None), &config, &items).unwrap();
        assert_eq!(hero.resources().stamina(), 0.75);
    }

    #[test]
    fn explicit_amounts_override_steps() {
        let (mut hero, config, items) = setup();

        let outcome = hero
            .dispatch(&InputAction::Damage(amount(1.5)), &config, &items)
            .unwrap();
        let report = match outcome {
            ActionOutcome::Damaged(report) => report,
            other => panic!("expected damage outcome, got {other:?}"),
        };
        assert!(report.armor_broken);
        assert_eq!(hero.resources().health(), 0.5);

        hero.dispatch(&InputAction::HealArmor(amount(0.3)), &config, &items)
            .unwrap();
        assert!(hero.resources().has_armor());
        assert_eq!(hero.resources().armor(), 0.3);

        hero.dispatch(&InputAction::Heal(amount(0.25)), &config, &items)
            .unwrap();
        assert_eq!(hero.resources().health(), 0.75);
    }

    #[test]
    fn experience_action_reports_level_ups() {
        let (mut hero, config, items) = setup();
        let outcome = hero
            .dispatch(
                &InputAction::GainExperience(Amount::new(2500.0).unwrap()),
                &config,
                &items,
            )
            .unwrap();

        assert!(outcome.leveled_up());
        assert_eq!(hero.level(), 2);
        assert_eq!(hero.progression().experience(), 500.0);
        assert_eq!(hero.progression().experience_threshold(), 2500.0);
    }

    #[test]
    fn sprint_and_zoom_set_walk_speed_and_flags() {
        let (mut hero, config, items) = setup();
        assert_eq!(hero.max_walk_speed(), 500.0);

        hero.dispatch(&InputAction::Sprint, &config, &items).unwrap();
        assert!(hero.flags().contains(CharacterFlags::SPRINTING));
        assert_eq!(hero.max_walk_speed(), 1500.0);

        hero.dispatch(&InputAction::StopSprinting, &config, &items).unwrap();
        assert!(!hero.flags().contains(CharacterFlags::SPRINTING));
        assert_eq!(hero.max_walk_speed(), 600.0);

        hero.dispatch(&InputAction::ZoomIn, &config, &items).unwrap();
        assert!(hero.flags().contains(CharacterFlags::ZOOMED));
        assert_eq!(hero.max_walk_speed(), 300.0);

        hero.dispatch(&InputAction::StopZoom, &config, &items).unwrap();
        assert!(hero.flags().is_empty());
        assert_eq!(hero.max_walk_speed(), 600.0);
    }

    #[test]
    fn punch_toggles_flag() {
        let (mut hero, config, items) = setup();
        hero.dispatch(&InputAction::Punch, &config, &items).unwrap();
        assert!(hero.flags().contains(CharacterFlags::PUNCHING));
        hero.dispatch(&InputAction::StopPunch, &config, &items).unwrap();
        assert!(!hero.flags().contains(CharacterFlags::PUNCHING));
    }

    #[test]
    fn equip_without_overlap_does_nothing() {
        let (mut hero, config, items) = setup();
        let outcome = hero.dispatch(&InputAction::Equip, &config, &items).unwrap();
        assert_eq!(outcome, ActionOutcome::Nothing);
        assert!(hero.inventory.is_empty());
    }

    #[test]
    fn equip_takes_overlapped_weapon() {
        let (mut hero, config, items) = setup();
        hero.dispatch(&InputAction::OverlapItem(SWORD), &config, &items)
            .unwrap();

        let outcome = hero.dispatch(&InputAction::Equip, &config, &items).unwrap();
        assert_eq!(
            outcome,
            ActionOutcome::Equipped {
                item: SWORD,
                previous: None
            }
        );
        assert_eq!(hero.equipped_weapon(), Some(SWORD));
        assert!(hero.inventory.contains(SWORD));
        assert_eq!(hero.overlapping_item(), None);
    }

    #[test]
    fn equip_picks_up_non_weapons() {
        let (mut hero, config, items) = setup();
        hero.dispatch(&InputAction::OverlapItem(TORCH), &config, &items)
            .unwrap();

        let outcome = hero.dispatch(&InputAction::Equip, &config, &items).unwrap();
        assert_eq!(outcome, ActionOutcome::PickedUp { item: TORCH });
        assert_eq!(hero.equipped_weapon(), None);
    }

    #[test]
    fn equip_rejects_weapon_above_level() {
        let (mut hero, config, items) = setup();
        hero.dispatch(&InputAction::OverlapItem(GREATAXE), &config, &items)
            .unwrap();
        let before = hero.clone();

        let err = hero
            .dispatch(&InputAction::Equip, &config, &items)
            .unwrap_err();
        assert_eq!(
            err,
            ActionError::LevelTooLow {
                item: GREATAXE,
                required: 3,
                current: 1
            }
        );
        assert_eq!(hero, before);
    }

    #[test]
    fn wield_requires_carried_weapon() {
        let (mut hero, config, items) = setup();

        assert_eq!(
            hero.dispatch(&InputAction::Wield(SWORD), &config, &items),
            Err(ActionError::NotInInventory(SWORD))
        );

        hero.dispatch(&InputAction::PickUp(TORCH), &config, &items)
            .unwrap();
        assert_eq!(
            hero.dispatch(&InputAction::Wield(TORCH), &config, &items),
            Err(ActionError::NotAWeapon(TORCH))
        );

        hero.add_to_inventory(ItemHandle(99));
        assert_eq!(
            hero.dispatch(&InputAction::Wield(ItemHandle(99)), &config, &items),
            Err(ActionError::UnknownItem(ItemHandle(99)))
        );

        hero.add_to_inventory(SWORD);
        assert!(hero.dispatch(&InputAction::Wield(SWORD), &config, &items).is_ok());
        assert_eq!(hero.equipped_weapon(), Some(SWORD));
    }

    #[test]
    fn leveling_unlocks_heavier_weapons() {
        let (mut hero, _, items) = setup();
        hero.add_to_inventory(GREATAXE);
        assert!(hero.wield(GREATAXE, &items).is_err());

        // 2000 + 2500 to reach level 3.
        hero.gain_experience(4500.0);
        assert_eq!(hero.level(), 3);
        assert_eq!(hero.wield(GREATAXE, &items), Ok(None));
    }

    #[test]
    fn allocate_forwards_attribute_errors() {
        let (mut hero, config, items) = setup();
        hero.attributes.upgrade_points = 0;

        let err = hero
            .dispatch(&InputAction::Allocate(Attribute::Strength), &config, &items)
            .unwrap_err();
        assert_eq!(
            err,
            ActionError::Attribute(AttributeError::NoUpgradePoints {
                attribute: Attribute::Strength
            })
        );
    }

    #[test]
    fn rewards_pay_experience_or_items() {
        let (mut hero, _, _) = setup();

        let outcome = hero.claim_reward(&Reward::experience(2000.0)).unwrap();
        assert!(outcome.leveled_up());

        let outcome = hero.claim_reward(&Reward::item(SWORD)).unwrap();
        assert_eq!(outcome, ActionOutcome::PickedUp { item: SWORD });
        assert!(hero.inventory.contains(SWORD));

        assert_eq!(
            hero.claim_reward(&Reward::default()).unwrap(),
            ActionOutcome::Nothing
        );

        let broken = Reward {
            kind: RewardKind::Item,
            item: None,
            experience: 0.0,
        };
        assert_eq!(
            hero.claim_reward(&broken),
            Err(ActionError::RewardWithoutItem)
        );
    }

    #[test]
    fn status_reflects_state() {
        let (mut hero, config, items) = setup();
        hero.dispatch(&InputAction::Damage(amount(1.5)), &config, &items)
            .unwrap();
        let status = hero.status();

        assert_eq!(status.health, 0.5);
        assert!(!status.has_armor);
        assert_eq!(status.level, 1);
        assert!(status.to_string().starts_with("Hero | HP 0.50 | AR 0.00 (unarmored)"));
    }
}
