use serde::{Deserialize, Serialize};

use satchel_core::ValueObject;

/// Anything that can render a human-readable one-line description.
pub trait Describe {
    fn info(&self) -> String;
}

/// A carried item: name, weight (kg) and a free-text rarity label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    weight: f64,
    rarity: String,
}

impl Item {
    /// Build an item. Weight is stored as given; negative values are not rejected.
    pub fn new(name: impl Into<String>, weight: f64, rarity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight,
            rarity: rarity.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn rarity(&self) -> &str {
        &self.rarity
    }

    /// Replace the weight unconditionally.
    pub fn set_weight(&mut self, new_weight: f64) {
        self.weight = new_weight;
    }
}

impl ValueObject for Item {}

impl Describe for Item {
    fn info(&self) -> String {
        format!(
            "Name: {}, Weight: {}kg, Rarity: {}",
            self.name, self.weight, self.rarity
        )
    }
}
