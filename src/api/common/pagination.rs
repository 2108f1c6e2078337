//
//  bitbucket-search
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for Bitbucket API Responses
//!
//! Bitbucket Cloud paginates list endpoints with a `page` number and returns a
//! `next` URL when more results exist. The search layer never follows those
//! links itself: it passes the caller's cursor through as `page` and reports
//! the next page number back so the caller can ask for it.
//!
//! # Example
//!
//! ```rust
//! use bitbucket_search::api::common::PaginatedResponse;
//!
//! let json = r#"{
//!     "values": ["a", "b"],
//!     "page": 1,
//!     "pagelen": 2,
//!     "size": 5,
//!     "next": "https://api.bitbucket.org/2.0/repositories/myteam?page=2&pagelen=2"
//! }"#;
//!
//! let response: PaginatedResponse<String> = serde_json::from_str(json).unwrap();
//! assert_eq!(response.next_page().as_deref(), Some("2"));
//! ```

use serde::{Deserialize, Serialize};
use url::Url;

/// Paginated response from the Bitbucket Cloud API.
///
/// # Type Parameters
///
/// - `T` - The type of items contained in the `values` array
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `values` | `Vec<T>` | Array of items in the current page |
/// | `page` | `Option<u32>` | Current page number (1-indexed) |
/// | `pagelen` | `Option<u32>` | Number of items per page |
/// | `size` | `Option<u32>` | Total number of items across all pages |
/// | `next` | `Option<String>` | URL to fetch the next page |
/// | `previous` | `Option<String>` | URL to fetch the previous page |
///
/// # Notes
///
/// - The `size` field may not always be present for performance reasons
/// - Page numbers are 1-indexed (first page is page 1)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Array of items in the current page.
    #[serde(default = "Vec::new")]
    pub values: Vec<T>,

    /// Current page number (1-indexed).
    #[serde(default)]
    pub page: Option<u32>,

    /// Number of items per page.
    #[serde(default)]
    pub pagelen: Option<u32>,

    /// Total number of items across all pages.
    #[serde(default)]
    pub size: Option<u32>,

    /// URL to fetch the next page of results.
    #[serde(default)]
    pub next: Option<String>,

    /// URL to fetch the previous page of results.
    #[serde(default)]
    pub previous: Option<String>,
}

impl<T> PaginatedResponse<T> {
    /// Checks if there are more pages of results available.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns the cursor for the next page.
    ///
    /// This is the `page` query parameter of the `next` URL. Bitbucket
    /// sometimes issues opaque page tokens instead of numbers, so the value
    /// is returned as-is.
    pub fn next_page(&self) -> Option<String> {
        let next = self.next.as_deref()?;
        let url = Url::parse(next).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_page_extracts_page_param() {
        let response: PaginatedResponse<u32> = serde_json::from_str(
            r#"{"values": [1], "next": "https://api.bitbucket.org/2.0/x?pagelen=1&page=Zm9v"}"#,
        )
        .unwrap();
        assert!(response.has_next());
        assert_eq!(response.next_page().as_deref(), Some("Zm9v"));
    }

    #[test]
    fn test_next_page_absent() {
        let response: PaginatedResponse<u32> =
            serde_json::from_str(r#"{"values": [], "page": 3}"#).unwrap();
        assert!(!response.has_next());
        assert_eq!(response.next_page(), None);
    }

    #[test]
    fn test_missing_values_defaults_to_empty() {
        let response: PaginatedResponse<u32> = serde_json::from_str(r#"{"size": 0}"#).unwrap();
        assert!(response.values.is_empty());
    }
}
