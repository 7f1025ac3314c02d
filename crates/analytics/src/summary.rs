use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::query;
use crate::transaction::Transaction;

/// Inclusive `YYYY-MM-DD` bounds for [`query::in_date_range`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Every query run once over the same input, ready to serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary<'a> {
    pub count: usize,
    pub unique_types: BTreeSet<&'a str>,
    pub total_amount: f64,
    pub average_amount: f64,
    pub of_type: Vec<&'a Transaction>,
    pub in_range: Vec<&'a Transaction>,
    pub at_merchant: Vec<&'a Transaction>,
}

impl<'a> Summary<'a> {
    pub fn compute(
        txs: &'a [Transaction],
        kind: &str,
        range: &DateRange,
        merchant: &str,
    ) -> Self {
        Self {
            count: txs.len(),
            unique_types: query::unique_types(txs),
            total_amount: query::total_amount(txs),
            average_amount: query::average_amount(txs),
            of_type: query::by_type(txs, kind),
            in_range: query::in_date_range(txs, &range.start, &range.end),
            at_merchant: query::by_merchant(txs, merchant),
        }
    }
}
