use serde::{Deserialize, Serialize};

/// A transaction category, with optional parent linkage.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Primary identifier of the category.
    pub id: String,

    /// Category name or description.
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_description: Option<String>,
}
