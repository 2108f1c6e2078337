//
//  bitbucket-search
//  search/options.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Search request shapes: what the caller sends and what handlers receive.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{SearchScope, DEFAULT_PAGE_SIZE};

/// Opaque pagination token, passed to Bitbucket as the `page` parameter.
///
/// Callers may send it as a JSON number or string; it is never interpreted.
///
/// # Example
///
/// ```rust
/// use bitbucket_search::search::Cursor;
///
/// let page: Cursor = serde_json::from_str("2").unwrap();
/// let token: Cursor = serde_json::from_str(r#""Zm9v""#).unwrap();
/// assert_eq!(page.to_string(), "2");
/// assert_eq!(token.to_string(), "Zm9v");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Cursor {
    Page(u64),
    Token(String),
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{}", n),
            Self::Token(t) => f.write_str(t),
        }
    }
}

impl From<String> for Cursor {
    fn from(value: String) -> Self {
        Self::Token(value)
    }
}

impl From<&str> for Cursor {
    fn from(value: &str) -> Self {
        Self::Token(value.to_string())
    }
}

impl From<u64> for Cursor {
    fn from(value: u64) -> Self {
        Self::Page(value)
    }
}

/// Content category for `content` scope searches.
///
/// Produced by lower-casing the caller's value. Unrecognized values are kept
/// in [`ContentType::Other`] so the handler can report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentType {
    Code,
    Issue,
    PullRequest,
    Wiki,
    Commit,
    Other(String),
}

impl ContentType {
    /// Lower-cases `raw` and maps it onto a known type without rejecting
    /// anything.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bitbucket_search::search::ContentType;
    ///
    /// assert_eq!(ContentType::coerce("Issue"), ContentType::Issue);
    /// assert_eq!(ContentType::coerce("Blog"), ContentType::Other("blog".into()));
    /// ```
    pub fn coerce(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        match lowered.as_str() {
            "code" => Self::Code,
            "issue" => Self::Issue,
            "pullrequest" => Self::PullRequest,
            "wiki" => Self::Wiki,
            "commit" => Self::Commit,
            _ => Self::Other(lowered),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Code => "code",
            Self::Issue => "issue",
            Self::PullRequest => "pullrequest",
            Self::Wiki => "wiki",
            Self::Commit => "commit",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A search request as the caller sent it.
///
/// `scope` stays free text here so an unrecognized value can be reported back
/// in-band instead of failing to parse.
///
/// # Example
///
/// ```rust
/// use bitbucket_search::search::SearchOptions;
///
/// let options = SearchOptions::new("TODO")
///     .with_workspace("myteam")
///     .with_scope("repos");
/// assert_eq!(options.scope.as_deref(), Some("repos"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_slug: Option<String>,

    pub query: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
}

impl SearchOptions {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// The values filled in for omitted fields: scope `code` and a limit of
    /// [`DEFAULT_PAGE_SIZE`].
    pub fn defaults() -> Self {
        Self {
            scope: Some(SearchScope::Code.as_str().to_string()),
            limit: Some(DEFAULT_PAGE_SIZE),
            ..Default::default()
        }
    }

    /// Fills every omitted field from `defaults`.
    ///
    /// Values the caller set are never replaced, so applying the same
    /// defaults twice gives the same result as applying them once. The query
    /// is always the caller's.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bitbucket_search::search::{SearchOptions, DEFAULT_PAGE_SIZE};
    ///
    /// let filled = SearchOptions::new("bug")
    ///     .with_limit(5)
    ///     .or_defaults(&SearchOptions::defaults());
    /// assert_eq!(filled.scope.as_deref(), Some("code"));
    /// assert_eq!(filled.limit, Some(5));
    /// ```
    pub fn or_defaults(self, defaults: &SearchOptions) -> Self {
        Self {
            workspace_slug: self
                .workspace_slug
                .or_else(|| defaults.workspace_slug.clone()),
            repo_slug: self.repo_slug.or_else(|| defaults.repo_slug.clone()),
            query: self.query,
            scope: self.scope.or_else(|| defaults.scope.clone()),
            content_type: self.content_type.or_else(|| defaults.content_type.clone()),
            language: self.language.or_else(|| defaults.language.clone()),
            extension: self.extension.or_else(|| defaults.extension.clone()),
            limit: self.limit.or(defaults.limit),
            cursor: self.cursor.or_else(|| defaults.cursor.clone()),
        }
    }

    pub fn with_workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace_slug = Some(workspace.into());
        self
    }

    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo_slug = Some(repo.into());
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<Cursor>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

/// A request after defaulting and scope parsing, as handlers receive it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSearchParams {
    pub workspace_slug: String,
    pub repo_slug: Option<String>,
    pub query: String,
    pub scope: SearchScope,
    pub content_type: Option<ContentType>,
    pub language: Option<String>,
    pub extension: Option<String>,
    pub limit: u32,
    pub cursor: Option<Cursor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fully_specified() -> SearchOptions {
        SearchOptions::new("TODO")
            .with_workspace("myteam")
            .with_repo("api")
            .with_scope("content")
            .with_content_type("issue")
            .with_language("rust")
            .with_extension("rs")
            .with_limit(10)
            .with_cursor(3u64)
    }

    #[test]
    fn test_defaults_fill_only_missing_fields() {
        let filled = SearchOptions::new("TODO").or_defaults(&SearchOptions::defaults());
        assert_eq!(filled.scope.as_deref(), Some("code"));
        assert_eq!(filled.limit, Some(DEFAULT_PAGE_SIZE));
        assert_eq!(filled.workspace_slug, None);
        assert_eq!(filled.cursor, None);
    }

    #[test]
    fn test_defaults_leave_fully_specified_request_unchanged() {
        let options = fully_specified();
        assert_eq!(options.clone().or_defaults(&SearchOptions::defaults()), options);
    }

    #[test]
    fn test_defaults_are_idempotent() {
        let defaults = SearchOptions::defaults();
        for options in [
            SearchOptions::new("a"),
            SearchOptions::new("b").with_scope("prs"),
            SearchOptions::new("c").with_limit(1),
            fully_specified(),
        ] {
            let once = options.clone().or_defaults(&defaults);
            let twice = once.clone().or_defaults(&defaults);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_options_serialize_camel_case_without_nulls() {
        let json = serde_json::to_value(SearchOptions::new("q").with_repo("api")).unwrap();
        assert_eq!(json, serde_json::json!({"query": "q", "repoSlug": "api"}));
    }

    #[test]
    fn test_content_type_coercion_keeps_unknown_values() {
        assert_eq!(ContentType::coerce("PULLREQUEST"), ContentType::PullRequest);
        assert_eq!(ContentType::coerce("Wiki"), ContentType::Wiki);
        assert_eq!(
            ContentType::coerce("Snippet"),
            ContentType::Other("snippet".to_string())
        );
        assert_eq!(ContentType::coerce("Snippet").to_string(), "snippet");
    }
}
