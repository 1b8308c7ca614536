use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::CurrencyCode;

/// A single movement on an account.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Primary identifier of the transaction.
    pub id: String,

    /// Primary identifier of the owning account.
    pub account_id: String,

    /// Date the transaction was made.
    #[serde(with = "crate::dates::iso")]
    pub date: DateTime<Utc>,

    /// Original description from the institution.
    pub description: String,

    /// Signed amount of the transaction.
    pub amount: f64,

    /// Account balance after the transaction.
    pub balance: f64,

    pub currency_code: CurrencyCode,

    /// Institution-specific code, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_code: Option<String>,
}
