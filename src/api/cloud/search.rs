//
//  bitbucket-search
//  api/cloud/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Workspace code search result types.
//!
//! Returned by `GET /workspaces/{workspace}/search/code?search_query=...`.
//! Matches are reported as segments: a line is split into runs of text and
//! the runs that matched the query carry `"match": true`.
//!
//! # Response Shape
//!
//! ```json
//! {
//!   "size": 1, "page": 1, "pagelen": 10, "query_substituted": false,
//!   "values": [{
//!     "type": "code_search_result",
//!     "content_match_count": 1,
//!     "content_matches": [{"lines": [{"line": 3, "segments": [
//!         {"text": "    # "}, {"text": "TODO", "match": true}, {"text": ": fix"}
//!     ]}]}],
//!     "path_matches": [{"text": "src/app.py"}],
//!     "file": {"path": "src/app.py", "type": "commit_file",
//!              "commit": {"hash": "abc", "repository": {"full_name": "myteam/api"}}}
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::api::common::{Links, PaginatedResponse};

use super::repositories::RepositoryRef;

/// A page of code search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSearchPage {
    #[serde(flatten)]
    pub page: PaginatedResponse<CodeSearchResult>,

    /// True when Bitbucket rewrote the query (e.g. dropped an invalid modifier).
    #[serde(default)]
    pub query_substituted: bool,
}

/// One file that matched a code search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSearchResult {
    #[serde(default)]
    pub content_match_count: u32,

    #[serde(default)]
    pub content_matches: Vec<ContentMatch>,

    #[serde(default)]
    pub path_matches: Vec<Segment>,

    pub file: SearchFile,
}

impl CodeSearchResult {
    /// The file path with matched runs in `**`, when the path itself matched.
    pub fn highlighted_path(&self) -> Option<String> {
        self.path_matches
            .iter()
            .any(|s| s.is_match)
            .then(|| highlight(&self.path_matches))
    }

    /// Full name of the repository the file belongs to, if reported.
    pub fn repository(&self) -> Option<&str> {
        self.file
            .commit
            .as_ref()
            .and_then(|c| c.repository.as_ref())
            .map(|r| r.full_name.as_str())
    }
}

/// Group of matching lines within one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentMatch {
    #[serde(default)]
    pub lines: Vec<MatchLine>,
}

/// A single line with its segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchLine {
    pub line: u32,

    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl MatchLine {
    /// Concatenates the segments, wrapping matched runs in `**`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bitbucket_search::api::cloud::search::{MatchLine, Segment};
    ///
    /// let line = MatchLine {
    ///     line: 3,
    ///     segments: vec![
    ///         Segment { text: "# ".into(), is_match: false },
    ///         Segment { text: "TODO".into(), is_match: true },
    ///     ],
    /// };
    /// assert_eq!(line.highlighted(), "# **TODO**");
    /// ```
    pub fn highlighted(&self) -> String {
        highlight(&self.segments)
    }
}

fn highlight(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| {
            if s.is_match {
                format!("**{}**", s.text)
            } else {
                s.text.clone()
            }
        })
        .collect()
}

/// A run of text, flagged when it matched the query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,

    #[serde(default, rename = "match")]
    pub is_match: bool,
}

/// The file a search result points at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchFile {
    pub path: String,

    #[serde(default)]
    pub commit: Option<SearchCommit>,

    #[serde(default)]
    pub links: Links,
}

/// Commit the indexed file was read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCommit {
    #[serde(default)]
    pub hash: Option<String>,

    #[serde(default)]
    pub repository: Option<RepositoryRef>,
}
