//! Connector types: the institutions available for aggregation and the
//! credential forms they require.

use serde::{Deserialize, Serialize};

/// An institution supported by the aggregation platform.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    /// Primary identifier of the connector.
    pub id: i64,

    /// Institution name.
    pub name: String,

    pub institution_url: String,

    pub image_url: String,

    pub primary_color: Option<String>,

    #[serde(rename = "type")]
    pub connector_type: ConnectorType,

    /// Country of the institution (ISO 3166-1 alpha-2).
    pub country: String,

    /// Parameters needed to execute the connector.
    pub credentials: Vec<ConnectorCredential>,

    /// For OAuth connectors only: URL the user must visit to authorize access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth_url: Option<String>,

    /// Served only when `includeHealth` is requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<ConnectorHealth>,
}

/// Kind of institution a connector aggregates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectorType {
    PersonalBank,
    BusinessBank,
    Invoice,
    Investment,
}
impl std::fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ConnectorType::PersonalBank => "PERSONAL_BANK",
                ConnectorType::BusinessBank => "BUSINESS_BANK",
                ConnectorType::Invoice => "INVOICE",
                ConnectorType::Investment => "INVESTMENT",
            }
        )
    }
}

/// One parameter of a connector's credential form.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorCredential {
    /// Parameter label shown to the user.
    pub label: String,

    /// Parameter key name, used as the key in [`Parameters`](super::Parameters).
    pub name: String,

    /// Input type, used to render a proper form field.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub credential_type: Option<CredentialType>,

    /// Whether this parameter is requested during MFA rather than login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mfa: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Regex checked against the submitted value before execution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,

    /// Whether the user may skip this parameter.
    #[serde(default)]
    pub optional: bool,
}

/// Form input type for a credential parameter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CredentialType {
    /// Numeric only data.
    Number,
    /// Alpha-numeric password, must be obfuscated.
    Password,
    /// Alpha-numeric data.
    Text,
}

/// Operational health of a connector, as reported by the platform.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorHealth {
    /// ONLINE, UNSTABLE or OFFLINE. Kept as a plain string; the set of
    /// values is owned by the server.
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
}
