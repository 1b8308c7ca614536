use serde::{Deserialize, Serialize};

/// Scoped access token for connecting items from a frontend.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConnectToken {
    pub access_token: String,
}

/// Options accepted when creating a connect token.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConnectTokenOptions {
    /// Client-side identifier of the end user, for webhook correlation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_user_id: Option<String>,

    /// Webhook to notify about events of items created with this token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}
