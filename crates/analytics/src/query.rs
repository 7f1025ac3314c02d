//! The six read-only queries.
//!
//! Filters return references into the input in their original order. An
//! empty result is never an error.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::transaction::Transaction;

/// Distinct transaction types.
pub fn unique_types(txs: &[Transaction]) -> BTreeSet<&str> {
    txs.iter().map(|t| t.kind.as_str()).collect()
}

/// Sum of all amounts; `0.0` for an empty slice.
pub fn total_amount(txs: &[Transaction]) -> f64 {
    txs.iter().map(|t| t.amount).sum()
}

pub fn by_type<'a>(txs: &'a [Transaction], kind: &str) -> Vec<&'a Transaction> {
    txs.iter().filter(|t| t.kind == kind).collect()
}

/// Transactions with `start <= date <= end`.
///
/// Dates are compared as strings, which is only meaningful for zero-padded
/// `YYYY-MM-DD` values. Other formats are not rejected.
pub fn in_date_range<'a>(txs: &'a [Transaction], start: &str, end: &str) -> Vec<&'a Transaction> {
    if !is_iso_date(start) || !is_iso_date(end) {
        tracing::debug!(start, end, "date range bound is not YYYY-MM-DD; comparing lexically");
    }
    txs.iter()
        .filter(|t| t.date.as_str() >= start && t.date.as_str() <= end)
        .collect()
}

pub fn by_merchant<'a>(txs: &'a [Transaction], merchant: &str) -> Vec<&'a Transaction> {
    txs.iter().filter(|t| t.merchant == merchant).collect()
}

/// Mean amount; `0.0` for an empty slice.
pub fn average_amount(txs: &[Transaction]) -> f64 {
    if txs.is_empty() {
        return 0.0;
    }
    total_amount(txs) / txs.len() as f64
}

/// True for a valid calendar date written as zero-padded `YYYY-MM-DD`.
pub fn is_iso_date(s: &str) -> bool {
    s.len() == 10 && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::fixture;
    use proptest::prelude::*;

    fn ids(txs: &[&Transaction]) -> Vec<u64> {
        txs.iter().map(|t| t.id).collect()
    }

    fn tx(id: u64, amount: f64) -> Transaction {
        Transaction {
            id,
            date: "2024-01-01".to_string(),
            amount,
            kind: "debit".to_string(),
            description: String::new(),
            merchant: "Shop".to_string(),
            card_type: "debit".to_string(),
        }
    }

    #[test]
    fn unique_types_of_fixture() {
        let txs = fixture();
        let types = unique_types(&txs);
        assert_eq!(types.into_iter().collect::<Vec<_>>(), vec!["credit", "debit"]);
    }

    #[test]
    fn totals_and_average_of_fixture() {
        let txs = fixture();
        assert_eq!(total_amount(&txs), 950.0);
        let avg = average_amount(&txs);
        assert!((avg - 316.67).abs() < 0.01, "avg = {avg}");
    }

    #[test]
    fn empty_input_yields_zero() {
        assert_eq!(total_amount(&[]), 0.0);
        assert_eq!(average_amount(&[]), 0.0);
        assert!(unique_types(&[]).is_empty());
    }

    #[test]
    fn by_type_keeps_order() {
        let txs = fixture();
        assert_eq!(ids(&by_type(&txs, "debit")), vec![1, 3]);
        assert_eq!(ids(&by_type(&txs, "credit")), vec![2]);
        assert!(by_type(&txs, "Debit").is_empty());
    }

    #[test]
    fn date_range_is_inclusive() {
        let txs = fixture();
        assert_eq!(ids(&in_date_range(&txs, "2024-02-20", "2024-02-21")), vec![1, 2]);
        assert_eq!(ids(&in_date_range(&txs, "2024-02-20", "2024-02-22")), vec![1, 2, 3]);
        assert_eq!(ids(&in_date_range(&txs, "2024-02-22", "2024-02-22")), vec![3]);
        assert!(in_date_range(&txs, "2024-02-23", "2024-03-01").is_empty());
    }

    #[test]
    fn inverted_range_is_empty() {
        let txs = fixture();
        assert!(in_date_range(&txs, "2024-02-22", "2024-02-20").is_empty());
    }

    #[test]
    fn by_merchant_exact_match() {
        let txs = fixture();
        assert_eq!(ids(&by_merchant(&txs, "Supermarket")), vec![1]);
        assert!(by_merchant(&txs, "supermarket").is_empty());
    }

    #[test]
    fn iso_date_check() {
        assert!(is_iso_date("2024-02-29"));
        assert!(!is_iso_date("2023-02-29"));
        assert!(!is_iso_date("2024-2-9"));
        assert!(!is_iso_date("2024-02-20T10:00:00Z"));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the average times the count equals the total.
        #[test]
        fn average_times_count_is_total(
            amounts in prop::collection::vec(0.0f64..10_000.0, 1..20)
        ) {
            let txs: Vec<Transaction> = amounts
                .iter()
                .enumerate()
                .map(|(i, a)| tx(i as u64, *a))
                .collect();
            let total = total_amount(&txs);
            let avg = average_amount(&txs);
            prop_assert!((avg * txs.len() as f64 - total).abs() < 1e-6);
        }

        /// Property: filtering by each unique type partitions the input.
        #[test]
        fn types_partition_input(
            kinds in prop::collection::vec(prop::sample::select(vec!["debit", "credit", "fee"]), 0..20)
        ) {
            let txs: Vec<Transaction> = kinds
                .iter()
                .enumerate()
                .map(|(i, k)| Transaction { kind: k.to_string(), ..tx(i as u64, 1.0) })
                .collect();
            let covered: usize = unique_types(&txs)
                .into_iter()
                .map(|k| by_type(&txs, k).len())
                .sum();
            prop_assert_eq!(covered, txs.len());
        }
    }
}
