//! Character inventory.
//!
//! An ordered, append-only list of item handles. The weight limit is carried
//! along for the host to display; adding items never checks it.

use crate::item::{ItemHandle, ItemOracle};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    pub weight_limit: f32,
    items: Vec<ItemHandle>,
}

impl Inventory {
    pub fn new(weight_limit: f32) -> Self {
        Self {
            weight_limit,
            items: Vec::new(),
        }
    }

    /// Appends an item. Duplicates are kept.
    pub fn add(&mut self, item: ItemHandle) {
        self.items.push(item);
    }

    pub fn contains(&self, item: ItemHandle) -> bool {
        self.items.contains(&item)
    }

    pub fn items(&self) -> &[ItemHandle] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the weights of all known items. Unknown handles weigh nothing.
    pub fn total_weight<O>(&self, oracle: &O) -> f32
    where
        O: ItemOracle + ?Sized,
    {
        self.items
            .iter()
            .filter_map(|handle| oracle.definition(*handle))
            .map(|definition| definition.weight)
            .sum()
    }

    /// Reports whether the carried weight exceeds the limit.
    pub fn is_over_weight_limit<O>(&self, oracle: &O) -> bool
    where
        O: ItemOracle + ?Sized,
    {
        self.total_weight(oracle) > self.weight_limit
    }
}
