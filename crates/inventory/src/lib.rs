//! Inventory domain module.
//!
//! Items and weapons as plain value types. Deterministic domain logic only
//! (no IO, no storage); the one side effect is a `tracing` notice when a
//! broken weapon is used.

pub mod gear;
pub mod item;
pub mod weapon;

pub use gear::Gear;
pub use item::{Describe, Item};
pub use weapon::{UseOutcome, Weapon, DURABILITY_MAX, WEAR_PER_USE};
