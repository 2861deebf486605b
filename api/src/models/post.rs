//! # Post models
//!
//! [`Post`] is the read-side document the API serves: author and category
//! come expanded, comments ride along with an approved-only count, and the
//! optional image is exposed both as the stored path and as an absolute
//! URL. [`PostDraft`] is the write-side payload — the category is sent as
//! a bare `category_id` and the author is implied by the bearer token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Author, Category, Comment};

/// Publication state of a post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    /// Wire value, also used for the status query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PostStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            _ => Err(()),
        }
    }
}

/// A blog article as served by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Server-side storage path of the attached image, if any.
    #[serde(default)]
    pub image: Option<String>,
    /// Absolute URL of the attached image, if any.
    #[serde(default)]
    pub image_url: Option<String>,
    pub status: PostStatus,
    pub author: Author,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub comments_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Category name for display, with the fallback the feed shows for
    /// uncategorised posts.
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("Uncategorized")
    }
}

/// Write-side payload for creating or updating a post.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

impl Default for PostStatus {
    fn default() -> Self {
        Self::Draft
    }
}

impl PostDraft {
    /// Reject drafts with missing required fields before any request.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Title is required");
        }
        if self.content.trim().is_empty() {
            return Err("Content is required");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST_JSON: &str = r#"{
        "id": 7,
        "title": "Hello",
        "content": "Body text",
        "image": null,
        "image_url": null,
        "status": "published",
        "author": {"id": 1, "username": "jdoe", "first_name": "", "last_name": ""},
        "category": {
            "id": 2,
            "name": "Rust",
            "description": "",
            "created_at": "2024-01-10T08:00:00Z"
        },
        "comments": [
            {
                "id": 11,
                "content": "Nice!",
                "author": {"id": 3, "username": "alice", "first_name": "", "last_name": ""},
                "created_at": "2024-01-16T12:00:00.123456Z",
                "is_approved": true
            }
        ],
        "comments_count": 1,
        "created_at": "2024-01-15T10:30:00Z",
        "updated_at": "2024-01-15T10:30:00Z"
    }"#;

    #[test]
    fn test_deserialize_full_post() {
        let post: Post = serde_json::from_str(POST_JSON).unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.status, PostStatus::Published);
        assert_eq!(post.author.username, "jdoe");
        assert_eq!(post.category_name(), "Rust");
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments_count, 1);
        assert!(post.image_url.is_none());
    }

    #[test]
    fn test_uncategorised_post_falls_back() {
        let mut value: serde_json::Value = serde_json::from_str(POST_JSON).unwrap();
        value["category"] = serde_json::Value::Null;
        let post: Post = serde_json::from_value(value).unwrap();
        assert_eq!(post.category_name(), "Uncategorized");
    }

    #[test]
    fn test_draft_serialises_without_empty_category() {
        let draft = PostDraft {
            title: "T".into(),
            content: "C".into(),
            status: PostStatus::Draft,
            category_id: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("category_id").is_none());
        assert_eq!(json["status"], "draft");
    }

    #[test]
    fn test_draft_serialises_category_when_set() {
        let draft = PostDraft {
            title: "T".into(),
            content: "C".into(),
            status: PostStatus::Published,
            category_id: Some(4),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["category_id"], 4);
        assert_eq!(json["status"], "published");
    }

    #[test]
    fn test_draft_validation_requires_title_and_content() {
        let draft = PostDraft {
            title: "  ".into(),
            content: "body".into(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err("Title is required"));

        let draft = PostDraft {
            title: "head".into(),
            content: "".into(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err("Content is required"));

        let draft = PostDraft {
            title: "head".into(),
            content: "body".into(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_status_parses_wire_values() {
        assert_eq!("draft".parse(), Ok(PostStatus::Draft));
        assert_eq!("published".parse(), Ok(PostStatus::Published));
        assert!("archived".parse::<PostStatus>().is_err());
    }
}
