//! # Post list filters
//!
//! [`PostQuery`] models every parameter the post list endpoint accepts.
//! Filtering happens entirely server-side: the client sends exactly the
//! fields that are set and renders exactly what comes back.

use chrono::NaiveDate;

use crate::models::PostStatus;

/// Query parameters for `GET /posts/`.
///
/// `Default` is the unfiltered listing. Set only what you need:
///
/// ```
/// use api::PostQuery;
///
/// let query = PostQuery {
///     search: Some("rust".into()),
///     category: Some(3),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostQuery {
    /// Free-text search over title, content, and author username.
    pub search: Option<String>,
    /// Exact category id.
    pub category: Option<i64>,
    /// Exact publication status.
    pub status: Option<PostStatus>,
    /// Exact author id.
    pub author: Option<i64>,
    /// Case-insensitive author username match.
    pub author_username: Option<String>,
    /// Case-insensitive title match.
    pub title: Option<String>,
    /// Case-insensitive content match.
    pub content: Option<String>,
    /// Posts created on or after this date.
    pub created_after: Option<NaiveDate>,
    /// Posts created on or before this date.
    pub created_before: Option<NaiveDate>,
    /// Ordering field, e.g. `-created_at` or `title`.
    pub ordering: Option<String>,
    /// Page number, for paginated listings.
    pub page: Option<u32>,
}

impl PostQuery {
    /// The set fields as query pairs, ready for `reqwest::RequestBuilder::query`.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref search) = self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(author) = self.author {
            pairs.push(("author", author.to_string()));
        }
        if let Some(ref username) = self.author_username {
            pairs.push(("author_username", username.clone()));
        }
        if let Some(ref title) = self.title {
            pairs.push(("title", title.clone()));
        }
        if let Some(ref content) = self.content {
            pairs.push(("content", content.clone()));
        }
        if let Some(after) = self.created_after {
            pairs.push(("created_after", after.to_string()));
        }
        if let Some(before) = self.created_before {
            pairs.push(("created_before", before.to_string()));
        }
        if let Some(ref ordering) = self.ordering {
            pairs.push(("ordering", ordering.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }

    /// True when no filter is set (the "show everything" listing).
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_sends_nothing() {
        let query = PostQuery::default();
        assert!(query.is_empty());
        assert!(query.pairs().is_empty());
    }

    #[test]
    fn test_set_fields_become_pairs() {
        let query = PostQuery {
            search: Some("rust".into()),
            category: Some(3),
            status: Some(PostStatus::Published),
            ..Default::default()
        };
        assert_eq!(
            query.pairs(),
            vec![
                ("search", "rust".to_string()),
                ("category", "3".to_string()),
                ("status", "published".to_string()),
            ]
        );
    }

    #[test]
    fn test_date_filters_use_iso_dates() {
        let query = PostQuery {
            created_after: NaiveDate::from_ymd_opt(2024, 1, 1),
            created_before: NaiveDate::from_ymd_opt(2024, 6, 30),
            ..Default::default()
        };
        assert_eq!(
            query.pairs(),
            vec![
                ("created_after", "2024-01-01".to_string()),
                ("created_before", "2024-06-30".to_string()),
            ]
        );
    }

    #[test]
    fn test_ordering_and_page() {
        let query = PostQuery {
            ordering: Some("-created_at".into()),
            page: Some(2),
            ..Default::default()
        };
        assert_eq!(
            query.pairs(),
            vec![
                ("ordering", "-created_at".to_string()),
                ("page", "2".to_string()),
            ]
        );
    }
}
