//
//  bitbucket-search
//  search/scope.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The four search categories.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What a search looks through.
///
/// Serialized with the canonical lower-case names the tool schema accepts.
/// [`SearchScope::from_name`] additionally accepts the CLI shorthands
/// `repos` and `prs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// File contents across the workspace's indexed repositories.
    Code,
    /// Code, issues or pull requests, chosen by content type.
    Content,
    /// Repository names and descriptions.
    Repositories,
    /// Pull request titles and descriptions in one repository.
    PullRequests,
}

impl SearchScope {
    pub const ALL: [SearchScope; 4] = [
        Self::Code,
        Self::Content,
        Self::Repositories,
        Self::PullRequests,
    ];

    /// Parses a scope name, case-insensitively, including aliases.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bitbucket_search::search::SearchScope;
    ///
    /// assert_eq!(SearchScope::from_name("PRs"), Some(SearchScope::PullRequests));
    /// assert_eq!(SearchScope::from_name("repos"), Some(SearchScope::Repositories));
    /// assert_eq!(SearchScope::from_name("wiki"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "code" => Some(Self::Code),
            "content" => Some(Self::Content),
            "repos" | "repositories" => Some(Self::Repositories),
            "prs" | "pullrequests" => Some(Self::PullRequests),
            _ => None,
        }
    }

    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Content => "content",
            Self::Repositories => "repositories",
            Self::PullRequests => "pullrequests",
        }
    }

    /// Canonical names joined for messages: `code, content, repositories, pullrequests`.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
