//! # Pagination envelope
//!
//! List endpoints answer either a DRF page object (`count` / `next` /
//! `previous` / `results`) or, for unpaginated actions like `popular`, a
//! bare array. [`ListResponse`] absorbs both shapes so every client list
//! call can normalise to a plain `Vec`.

use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Either a paginated envelope or a bare array.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paginated(Page<T>),
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    /// The items, whichever shape the server chose.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Paginated(page) => page.results,
            Self::Plain(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_body() {
        let body = r#"{"count": 2, "next": null, "previous": null, "results": [1, 2]}"#;
        let parsed: ListResponse<i64> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.into_vec(), vec![1, 2]);
    }

    #[test]
    fn test_bare_array_body() {
        let parsed: ListResponse<i64> = serde_json::from_str("[3, 4, 5]").unwrap();
        assert_eq!(parsed.into_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn test_empty_results() {
        let body = r#"{"count": 0, "next": null, "previous": null, "results": []}"#;
        let parsed: ListResponse<i64> = serde_json::from_str(body).unwrap();
        assert!(parsed.into_vec().is_empty());
    }
}
