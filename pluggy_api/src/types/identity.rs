//! Identity types: personal data the institution holds about the account owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity record associated with an item.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Primary identifier of the identity record.
    pub id: String,

    #[serde(
        default,
        with = "crate::dates::iso_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default)]
    pub phone_numbers: Vec<PhoneNumber>,

    #[serde(default)]
    pub emails: Vec<Email>,

    #[serde(default)]
    pub addresses: Vec<Address>,

    #[serde(default)]
    pub relations: Vec<IdentityRelation>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PhoneNumber {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<PhoneNumberType>,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Email {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<ContactType>,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<ContactType>,
}

/// A person related to the account owner.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IdentityRelation {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub relation_type: Option<RelationType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

/// Context of a phone number. Phone numbers additionally admit a
/// residential kind.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneNumberType {
    Personal,
    Work,
    /// Spelled this way by the vendor.
    Residencial,
}

/// Context of an email or address.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactType {
    Personal,
    Work,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationType {
    Mother,
    Father,
    Spouse,
}
