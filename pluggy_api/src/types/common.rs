use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// List envelope returned by every collection endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PageResponse<T> {
    pub results: Vec<T>,
}

/// Credential name to value map submitted when creating or updating an item.
pub type Parameters = HashMap<String, String>;
