use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::CurrencyCode;

/// An investment position belonging to an item.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    /// Primary identifier of the investment.
    pub id: String,

    /// Primary identifier of the owning item.
    pub item_id: String,

    #[serde(rename = "type")]
    pub investment_type: InvestmentType,

    /// Identifier from the institution for the investment.
    pub number: String,

    /// Current balance of the investment.
    pub balance: f64,

    /// Investment description.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_rate: Option<f64>,

    pub currency_code: CurrencyCode,

    /// Quota's date.
    #[serde(
        default,
        with = "crate::dates::iso_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateTime<Utc>>,

    /// Quota's value at date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Quota's quantity at date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    /// Taxes attached to the investment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxes: Option<f64>,

    /// Taxes attached to the owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxes2: Option<f64>,

    /// Amount available for withdrawal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_withdrawal: Option<f64>,

    /// Amount gained from the investment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_profit: Option<f64>,
}

/// Kind of investment, also usable as an `/investments` filter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentType {
    MutualFund,
    Security,
    Equity,
}
impl std::fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                InvestmentType::MutualFund => "MUTUAL_FUND",
                InvestmentType::Security => "SECURITY",
                InvestmentType::Equity => "EQUITY",
            }
        )
    }
}
