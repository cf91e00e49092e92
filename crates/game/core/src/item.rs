//! Item and weapon definitions.
//!
//! Items are immutable descriptive records. Characters and quests refer to
//! them by [`ItemHandle`]; the definitions themselves are looked up through an
//! [`ItemOracle`].

use std::collections::BTreeMap;

/// Reference to an item definition stored outside the character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemHandle(pub u32);

impl core::fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Item definition with common fields and type-specific data.
///
/// # Design: Base + Kind Pattern
///
/// - Base struct holds common fields (handle, name, weight)
/// - `kind` enum holds type-specific data (weapon stats)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub name: String,
    pub weight: f32,
    pub kind: ItemKind,
}

impl ItemDefinition {
    pub fn new(handle: ItemHandle, name: impl Into<String>, weight: f32, kind: ItemKind) -> Self {
        Self {
            handle,
            name: name.into(),
            weight,
            kind,
        }
    }

    /// Shorthand for a weapon definition.
    pub fn weapon(
        handle: ItemHandle,
        name: impl Into<String>,
        weight: f32,
        weapon: WeaponData,
    ) -> Self {
        Self::new(handle, name, weight, ItemKind::Weapon(weapon))
    }

    pub fn as_weapon(&self) -> Option<&WeaponData> {
        match &self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            ItemKind::Misc => None,
        }
    }
}

/// Item type with type-specific data.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Plain carryable item without extra data.
    #[default]
    Misc,

    /// Equippable weapon.
    Weapon(WeaponData),
}

/// Weapon-specific data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub kind: WeaponKind,
    /// Minimum character level needed to equip the weapon.
    pub level_requirement: u32,
    pub base_damage: f32,
    pub base_speed: f32,
}

impl WeaponData {
    pub fn new(kind: WeaponKind, level_requirement: u32, base_damage: f32, base_speed: f32) -> Self {
        Self {
            kind,
            level_requirement,
            base_damage,
            base_speed,
        }
    }
}

/// Weapon families.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponKind {
    #[default]
    Default,
    Sword,
    Dagger,
    Axe,
}

/// Read access to item definitions.
pub trait ItemOracle {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition>;

    /// Finds an item by its display name (case-insensitive).
    fn find_by_name(&self, name: &str) -> Option<&ItemDefinition>;
}

/// In-memory item catalog keyed by handle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemCatalog {
    items: BTreeMap<ItemHandle, ItemDefinition>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a definition, returning the one it replaced.
    pub fn insert(&mut self, definition: ItemDefinition) -> Option<ItemDefinition> {
        self.items.insert(definition.handle, definition)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.values()
    }
}

impl FromIterator<ItemDefinition> for ItemCatalog {
    fn from_iter<T: IntoIterator<Item = ItemDefinition>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for definition in iter {
            catalog.insert(definition);
        }
        catalog
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.items.get(&handle)
    }

    fn find_by_name(&self, name: &str) -> Option<&ItemDefinition> {
        self.items
            .values()
            .find(|definition| definition.name.eq_ignore_ascii_case(name))
    }
}
