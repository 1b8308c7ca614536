//! Account types returned by the API, including bank and credit card detail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bank account or credit card belonging to an item.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Primary identifier of the account.
    pub id: String,

    /// Primary identifier of the owning item.
    pub item_id: String,

    #[serde(rename = "type")]
    pub account_type: AccountType,

    pub subtype: AccountSubtype,

    /// Account number at the institution.
    pub number: String,

    /// Current balance.
    pub balance: f64,

    /// Account name or description.
    pub name: String,

    /// Commercial name the institution gives the account at the client's level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing_name: Option<String>,

    /// Owner's name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Owner's tax number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,

    pub currency_code: CurrencyCode,

    /// Present for BANK accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_data: Option<BankData>,

    /// Present for CREDIT accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_data: Option<CreditData>,
}

/// Coarse account kind, also usable as a `/accounts` filter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    Bank,
    Credit,
}
impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AccountType::Bank => "BANK",
                AccountType::Credit => "CREDIT",
            }
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountSubtype {
    SavingsAccount,
    CheckingsAccount,
    CreditCard,
}

/// ISO 4217 currency codes served by the platform.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyCode {
    USD,
    ARS,
    BRL,
}

/// Bank-specific detail of an account.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BankData {
    /// Full identifier used to receive transfers (branch/number).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_balance: Option<f64>,
}

/// Credit-card-specific detail of an account.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreditData {
    /// Client's level for this card (gold, platinum, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Card brand (visa, mastercard, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Close date of the current statement.
    #[serde(
        default,
        with = "crate::dates::iso_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub balance_close_date: Option<DateTime<Utc>>,

    /// Due date of the current statement.
    #[serde(
        default,
        with = "crate::dates::iso_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub balance_due_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_credit_limit: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_foreign_currency: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_payment: Option<f64>,
}
