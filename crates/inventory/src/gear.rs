use serde::{Deserialize, Serialize};

use crate::item::{Describe, Item};
use crate::weapon::Weapon;

/// Anything that can sit in an inventory slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Gear {
    Item(Item),
    Weapon(Weapon),
}

impl Gear {
    /// Shared item fields, whatever the variant.
    pub fn item(&self) -> &Item {
        match self {
            Gear::Item(item) => item,
            Gear::Weapon(weapon) => weapon.item(),
        }
    }

    pub fn set_weight(&mut self, new_weight: f64) {
        match self {
            Gear::Item(item) => item.set_weight(new_weight),
            Gear::Weapon(weapon) => weapon.set_weight(new_weight),
        }
    }

    pub fn as_weapon(&self) -> Option<&Weapon> {
        match self {
            Gear::Weapon(weapon) => Some(weapon),
            Gear::Item(_) => None,
        }
    }

    pub fn as_weapon_mut(&mut self) -> Option<&mut Weapon> {
        match self {
            Gear::Weapon(weapon) => Some(weapon),
            Gear::Item(_) => None,
        }
    }
}

impl Describe for Gear {
    fn info(&self) -> String {
        match self {
            Gear::Item(item) => item.info(),
            Gear::Weapon(weapon) => weapon.info(),
        }
    }
}

impl From<Item> for Gear {
    fn from(item: Item) -> Self {
        Gear::Item(item)
    }
}

impl From<Weapon> for Gear {
    fn from(weapon: Weapon) -> Self {
        Gear::Weapon(weapon)
    }
}
