//! Item types: a user's connection to an institution through a connector.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::connector::{Connector, ConnectorCredential};

/// A connection between a user and an institution.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Primary identifier of the item.
    pub id: String,

    /// Connector this item was created from.
    pub connector: Connector,

    /// Connection status from the consumer's point of view.
    pub status: ItemStatus,

    /// Fine-grained execution step. The remote server owns this state
    /// machine and its value set, so it is reported verbatim.
    pub execution_status: String,

    /// Date of the first connection.
    #[serde(with = "crate::dates::iso")]
    pub created_at: DateTime<Utc>,

    /// Last successful sync with the institution.
    #[serde(
        default,
        with = "crate::dates::iso_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated_at: Option<DateTime<Utc>>,

    /// When status is WAITING_USER_INPUT, the credential being requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<ConnectorCredential>,

    /// Present when the last execution ended in an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ItemError>,
}

/// High-level status of an item.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    /// The institution rejected the stored credentials.
    LoginError,
    /// The last sync attempt did not complete.
    Outdated,
    /// Data is synced with the institution.
    Updated,
    /// A sync is in progress.
    Updating,
    /// The connector is waiting for user input (MFA).
    WaitingUserInput,
}

impl ItemStatus {
    /// Whether the item has finished executing. Consumers polling an item
    /// stop on LOGIN_ERROR, OUTDATED or UPDATED; UPDATING and
    /// WAITING_USER_INPUT mean the execution is still running.
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            ItemStatus::LoginError | ItemStatus::Outdated | ItemStatus::Updated
        )
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ItemStatus::LoginError => "LOGIN_ERROR",
                ItemStatus::Outdated => "OUTDATED",
                ItemStatus::Updated => "UPDATED",
                ItemStatus::Updating => "UPDATING",
                ItemStatus::WaitingUserInput => "WAITING_USER_INPUT",
            }
        )
    }
}

/// Error reported by the platform for a failed item execution.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ItemError {
    pub code: i64,
    pub message: String,
}
