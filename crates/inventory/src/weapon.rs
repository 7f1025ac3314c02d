use serde::{Deserialize, Serialize};

use satchel_core::ValueObject;

use crate::item::{Describe, Item};

/// Durability of a freshly repaired weapon.
pub const DURABILITY_MAX: u32 = 100;

/// Durability lost per use.
pub const WEAR_PER_USE: u32 = 10;

/// Result of using a weapon once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UseOutcome {
    /// The weapon lost durability; `durability` is the new value.
    Worn { durability: u32 },
    /// Durability was already 0. Nothing changed.
    Broken,
}

/// An item with damage and durability.
///
/// Durability moves only through [`Weapon::use_once`] (-10, floor 0) and
/// [`Weapon::repair`] (back to 100). The constructor stores whatever it is
/// given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    #[serde(flatten)]
    item: Item,
    damage: u32,
    durability: u32,
}

impl Weapon {
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        rarity: impl Into<String>,
        damage: u32,
        durability: u32,
    ) -> Self {
        Self::from_item(Item::new(name, weight, rarity), damage, durability)
    }

    /// Arm an existing item.
    pub fn from_item(item: Item, damage: u32, durability: u32) -> Self {
        Self {
            item,
            damage,
            durability,
        }
    }

    /// The base item fields.
    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn name(&self) -> &str {
        self.item.name()
    }

    pub fn weight(&self) -> f64 {
        self.item.weight()
    }

    pub fn rarity(&self) -> &str {
        self.item.rarity()
    }

    pub fn set_weight(&mut self, new_weight: f64) {
        self.item.set_weight(new_weight);
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn durability(&self) -> u32 {
        self.durability
    }

    pub fn is_broken(&self) -> bool {
        self.durability == 0
    }

    /// Use the weapon once.
    ///
    /// A broken weapon stays broken: the call only emits a notice.
    pub fn use_once(&mut self) -> UseOutcome {
        if self.is_broken() {
            tracing::warn!(weapon = %self.name(), "{} is broken!", self.name());
            return UseOutcome::Broken;
        }

        self.durability = self.durability.saturating_sub(WEAR_PER_USE);
        tracing::debug!(
            weapon = %self.name(),
            durability = self.durability,
            "weapon used"
        );
        UseOutcome::Worn {
            durability: self.durability,
        }
    }

    /// Restore durability to the maximum, whatever it was before.
    pub fn repair(&mut self) {
        self.durability = DURABILITY_MAX;
        tracing::debug!(weapon = %self.name(), "weapon repaired");
    }
}

impl ValueObject for Weapon {}

impl Describe for Weapon {
    fn info(&self) -> String {
        format!(
            "{}, Damage: {}, Durability: {}",
            self.item.info(),
            self.damage,
            self.durability
        )
    }
}
