use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tag grouping used to filter posts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}
