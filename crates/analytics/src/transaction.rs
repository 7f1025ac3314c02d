use serde::{Deserialize, Serialize};

use satchel_core::{DomainResult, ValueObject};

/// A single card transaction.
///
/// `date` is a zero-padded `YYYY-MM-DD` string; range queries compare it
/// lexically. `kind` is a free-text classifier such as `"debit"` or `"credit"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(alias = "transaction_id")]
    pub id: u64,
    #[serde(alias = "transaction_date")]
    pub date: String,
    #[serde(alias = "transaction_amount")]
    pub amount: f64,
    #[serde(rename = "type", alias = "transaction_type")]
    pub kind: String,
    #[serde(alias = "transaction_description")]
    pub description: String,
    #[serde(alias = "merchant_name")]
    pub merchant: String,
    pub card_type: String,
}

impl ValueObject for Transaction {}

/// Parse a JSON array of transactions.
///
/// Both the short field names (`id`, `type`, `merchant`, ...) and the long
/// `transaction_*` / `merchant_name` names are accepted.
pub fn load_transactions(json: &str) -> DomainResult<Vec<Transaction>> {
    let txs: Vec<Transaction> = serde_json::from_str(json)?;
    tracing::debug!(count = txs.len(), "transactions loaded");
    Ok(txs)
}

/// The built-in three-record sample.
pub fn fixture() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            date: "2024-02-20".to_string(),
            amount: 150.0,
            kind: "debit".to_string(),
            description: "Store payment".to_string(),
            merchant: "Supermarket".to_string(),
            card_type: "debit".to_string(),
        },
        Transaction {
            id: 2,
            date: "2024-02-21".to_string(),
            amount: 300.0,
            kind: "credit".to_string(),
            description: "Refund".to_string(),
            merchant: "Online Store".to_string(),
            card_type: "credit".to_string(),
        },
        Transaction {
            id: 3,
            date: "2024-02-22".to_string(),
            amount: 500.0,
            kind: "debit".to_string(),
            description: "Utility payment".to_string(),
            merchant: "Utility Company".to_string(),
            card_type: "debit".to_string(),
        },
    ]
}
