//
//  bitbucket-search
//  tools/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Arguments of the `search` tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{check_limit, check_required};
use super::{Validate, ValidationIssue};
use crate::search::{Cursor, SearchOptions, SearchScope};

fn default_scope() -> SearchScope {
    SearchScope::Code
}

/// Search Bitbucket code, content, repositories or pull requests.
///
/// Same fields as `bb search`, in camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchToolArgs {
    /// Workspace slug to search in. If omitted, the default workspace is used.
    /// Example: "myteam". Equivalent to --workspace in the CLI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_slug: Option<String>,

    /// Repository slug to limit the search to. Required for the
    /// "pullrequests" scope. Example: "project-api". Equivalent to --repo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_slug: Option<String>,

    /// Search query text. Equivalent to --query.
    #[schemars(length(min = 1))]
    pub query: String,

    /// What to search: "code", "content", "repositories" or "pullrequests".
    /// Equivalent to --type.
    #[serde(default = "default_scope")]
    pub scope: SearchScope,

    /// Content type for content search (e.g. "issue", "pullrequest").
    /// Equivalent to --content-type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Filter code search by language. Equivalent to --language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Filter code search by file extension. Equivalent to --extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    /// Maximum number of results to return (1-100). Defaults to 25.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 100))]
    pub limit: Option<i64>,

    /// Pagination cursor from a previous response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
}

impl Validate for SearchToolArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        check_required(&mut issues, "query", &self.query, "query must not be empty");
        check_limit(&mut issues, self.limit);

        if self.scope == SearchScope::PullRequests
            && self.repo_slug.as_deref().map_or(true, str::is_empty)
        {
            issues.push(ValidationIssue::new(
                &["repoSlug"],
                r#"repoSlug is required when scope is "pullrequests""#,
            ));
        }

        issues
    }
}

impl From<SearchToolArgs> for SearchOptions {
    /// Expects validated arguments; an out-of-range limit is dropped so the
    /// default applies.
    fn from(args: SearchToolArgs) -> Self {
        SearchOptions {
            workspace_slug: args.workspace_slug,
            repo_slug: args.repo_slug,
            query: args.query,
            scope: Some(args.scope.as_str().to_string()),
            content_type: args.content_type,
            language: args.language,
            extension: args.extension,
            limit: args.limit.and_then(|l| u32::try_from(l).ok()),
            cursor: args.cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{parse_tool_args, ToolArgsError};
    use serde_json::json;

    fn issues(args: serde_json::Value) -> Vec<ValidationIssue> {
        match parse_tool_args::<SearchToolArgs>(args) {
            Ok(_) => Vec::new(),
            Err(ToolArgsError::Invalid(issues)) => issues,
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_minimal_args_default_to_code() {
        let args = parse_tool_args::<SearchToolArgs>(json!({"query": "TODO"})).unwrap();
        assert_eq!(args.scope, SearchScope::Code);
        assert_eq!(args.limit, None);
    }

    #[test]
    fn test_pull_request_scope_requires_repo() {
        let found = issues(json!({"query": "bug", "scope": "pullrequests"}));
        assert_eq!(
            found,
            vec![ValidationIssue::new(
                &["repoSlug"],
                r#"repoSlug is required when scope is "pullrequests""#
            )]
        );

        assert!(issues(json!({"query": "bug", "scope": "pullrequests", "repoSlug": "api"})).is_empty());
    }

    #[test]
    fn test_collects_every_issue() {
        let found = issues(json!({"query": "", "limit": 500, "scope": "pullrequests"}));
        let paths: Vec<_> = found.iter().map(|i| i.path.join(".")).collect();
        assert_eq!(paths, vec!["query", "limit", "repoSlug"]);
    }

    #[test]
    fn test_aliases_are_not_tool_scopes() {
        let err = parse_tool_args::<SearchToolArgs>(json!({"query": "q", "scope": "prs"}))
            .unwrap_err();
        assert!(matches!(err, ToolArgsError::Malformed(_)));
    }

    #[test]
    fn test_cursor_accepts_string_or_number() {
        let args =
            parse_tool_args::<SearchToolArgs>(json!({"query": "q", "cursor": 3})).unwrap();
        assert_eq!(args.cursor, Some(Cursor::Page(3)));

        let args =
            parse_tool_args::<SearchToolArgs>(json!({"query": "q", "cursor": "Zm9v"})).unwrap();
        assert_eq!(args.cursor, Some(Cursor::Token("Zm9v".into())));
    }

    #[test]
    fn test_into_search_options() {
        let args = parse_tool_args::<SearchToolArgs>(json!({
            "query": "TODO",
            "workspaceSlug": "myteam",
            "scope": "repositories",
            "limit": 10
        }))
        .unwrap();

        let options = SearchOptions::from(args);
        assert_eq!(options.workspace_slug.as_deref(), Some("myteam"));
        assert_eq!(options.scope.as_deref(), Some("repositories"));
        assert_eq!(options.limit, Some(10));
        assert_eq!(options.cursor, None);
    }
}
