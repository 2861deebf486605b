use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Author;

/// A comment on a post. Only approved comments are served to the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_approved")]
    pub is_approved: bool,
}

fn default_approved() -> bool {
    true
}
