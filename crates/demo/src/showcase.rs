//! Scripted walkthroughs. Each returns the values it logged so callers and
//! tests can check them without scraping output.

use satchel_analytics::{DateRange, Summary, Transaction};
use satchel_inventory::{Describe, Gear, Item, UseOutcome, Weapon};

/// What the inventory walkthrough observed, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryReport {
    pub infos: Vec<String>,
    pub outcomes: Vec<UseOutcome>,
    pub repaired_durability: u32,
}

pub fn inventory() -> InventoryReport {
    let mut infos = Vec::new();
    let mut outcomes = Vec::new();

    let mut sword = Item::new("Steel Sword", 3.5, "rare");
    infos.push(sword.info());
    sword.set_weight(4.0);
    infos.push(sword.info());

    let mut bow = Weapon::new("Longbow", 2.0, "uncommon", 15, 100);
    infos.push(bow.info());
    outcomes.push(bow.use_once());
    tracing::info!(durability = bow.durability(), "durability after use");
    bow.repair();
    tracing::info!(durability = bow.durability(), "durability after repair");
    let repaired_durability = bow.durability();

    let mut satchel: Vec<Gear> = vec![
        sword.into(),
        bow.into(),
        Weapon::new("Dagger", 1.2, "common", 10, 10).into(),
    ];
    for gear in &mut satchel {
        if let Some(weapon) = gear.as_weapon_mut() {
            outcomes.push(weapon.use_once());
        }
    }
    if let Some(dagger) = satchel.last_mut().and_then(Gear::as_weapon_mut) {
        outcomes.push(dagger.use_once());
    }

    for gear in &satchel {
        infos.push(gear.info());
    }
    for info in &infos {
        tracing::info!(%info, "item");
    }

    InventoryReport {
        infos,
        outcomes,
        repaired_durability,
    }
}

pub fn analytics(txs: &[Transaction]) -> anyhow::Result<Summary<'_>> {
    let range = DateRange::new("2024-02-20", "2024-02-22");
    let summary = Summary::compute(txs, "debit", &range, "Supermarket");
    let rendered = serde_json::to_string(&summary)?;
    tracing::info!(summary = %rendered, "transaction summary");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_analytics::fixture;

    #[test]
    fn inventory_walkthrough() {
        let report = inventory();

        assert_eq!(report.infos[0], "Name: Steel Sword, Weight: 3.5kg, Rarity: rare");
        assert_eq!(report.infos[1], "Name: Steel Sword, Weight: 4kg, Rarity: rare");
        assert_eq!(report.repaired_durability, 100);
        assert_eq!(
            report.outcomes,
            vec![
                UseOutcome::Worn { durability: 90 },
                UseOutcome::Worn { durability: 90 },
                UseOutcome::Worn { durability: 0 },
                UseOutcome::Broken,
            ]
        );
        assert_eq!(
            report.infos.last().map(String::as_str),
            Some("Name: Dagger, Weight: 1.2kg, Rarity: common, Damage: 10, Durability: 0")
        );
    }

    #[test]
    fn analytics_walkthrough() {
        let txs = fixture();
        let summary = analytics(&txs).unwrap();
        assert_eq!(summary.total_amount, 950.0);
        assert_eq!(summary.of_type.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(summary.at_merchant.len(), 1);
    }
}
