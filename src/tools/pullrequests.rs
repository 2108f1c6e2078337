//
//  bitbucket-search
//  tools/pullrequests.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Arguments of the pull request tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{
    check_positive, check_required, PaginationArgs, PullRequestIdentifierArgs, RepoIdentifierArgs,
};
use super::{Validate, ValidationIssue};

/// Pull request state filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum PullRequestState {
    Open,
    Merged,
    Declined,
    Superseded,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListPullRequestsToolArgs {
    #[serde(flatten)]
    pub repo: RepoIdentifierArgs,

    /// Only pull requests in this state. All states if omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<PullRequestState>,

    /// Text matched against title, description or author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(flatten)]
    pub pagination: PaginationArgs,
}

impl Validate for ListPullRequestsToolArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = self.repo.validate();
        issues.extend(self.pagination.validate());
        issues
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPullRequestToolArgs {
    #[serde(flatten)]
    pub pr: PullRequestIdentifierArgs,

    /// Include the full diff instead of a file summary.
    #[serde(default = "default_true")]
    pub include_full_diff: bool,

    /// Include comments. Slower on busy pull requests.
    #[serde(default)]
    pub include_comments: bool,
}

impl Validate for GetPullRequestToolArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        self.pr.validate()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListPullRequestCommentsToolArgs {
    #[serde(flatten)]
    pub pr: PullRequestIdentifierArgs,

    #[serde(flatten)]
    pub pagination: PaginationArgs,
}

impl Validate for ListPullRequestCommentsToolArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = self.pr.validate();
        issues.extend(self.pagination.validate());
        issues
    }
}

/// File and line an inline comment is attached to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InlineCommentLocation {
    #[schemars(length(min = 1))]
    pub path: String,

    #[schemars(range(min = 1))]
    pub line: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePullRequestCommentToolArgs {
    #[serde(flatten)]
    pub pr: PullRequestIdentifierArgs,

    /// Comment body in Markdown.
    #[schemars(length(min = 1))]
    pub content: String,

    /// Attach the comment to a line of a file instead of the whole pull request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<InlineCommentLocation>,
}

impl Validate for CreatePullRequestCommentToolArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = self.pr.validate();
        check_required(
            &mut issues,
            "content",
            &self.content,
            "Comment content is required",
        );

        if let Some(inline) = &self.inline {
            if inline.path.is_empty() {
                issues.push(ValidationIssue::new(
                    &["inline", "path"],
                    "File path is required for inline comments",
                ));
            }
            check_positive(&mut issues, &["inline", "line"], Some(inline.line));
        }

        issues
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePullRequestToolArgs {
    #[serde(flatten)]
    pub repo: RepoIdentifierArgs,

    #[schemars(length(min = 1))]
    pub title: String,

    /// Branch containing the changes.
    #[schemars(length(min = 1))]
    pub source_branch: String,

    /// Branch to merge into. Defaults to the repository's main branch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_branch: Option<String>,

    /// Description in Markdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Delete the source branch after merge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_source_branch: Option<bool>,
}

impl Validate for CreatePullRequestToolArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = self.repo.validate();
        check_required(
            &mut issues,
            "title",
            &self.title,
            "Pull request title is required",
        );
        check_required(
            &mut issues,
            "sourceBranch",
            &self.source_branch,
            "Source branch name is required",
        );
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{parse_tool_args, ToolArgsError};
    use serde_json::json;

    #[test]
    fn test_get_pull_request_defaults() {
        let args = parse_tool_args::<GetPullRequestToolArgs>(json!({
            "repoSlug": "api",
            "prId": "42"
        }))
        .unwrap();
        assert!(args.include_full_diff);
        assert!(!args.include_comments);
    }

    #[test]
    fn test_state_is_an_upper_case_enum() {
        let args = parse_tool_args::<ListPullRequestsToolArgs>(json!({
            "repoSlug": "api",
            "state": "MERGED"
        }))
        .unwrap();
        assert_eq!(args.state, Some(PullRequestState::Merged));

        let err = parse_tool_args::<ListPullRequestsToolArgs>(json!({
            "repoSlug": "api",
            "state": "merged"
        }))
        .unwrap_err();
        assert!(matches!(err, ToolArgsError::Malformed(_)));
    }

    #[test]
    fn test_inline_comment_location_is_checked() {
        let err = parse_tool_args::<CreatePullRequestCommentToolArgs>(json!({
            "repoSlug": "api",
            "prId": "7",
            "content": "nit",
            "inline": {"path": "", "line": 0}
        }))
        .unwrap_err();

        let paths: Vec<_> = err.issues().into_iter().map(|i| i.path.join(".")).collect();
        assert_eq!(paths, vec!["inline.path", "inline.line"]);
    }

    #[test]
    fn test_create_pull_request() {
        let args = parse_tool_args::<CreatePullRequestToolArgs>(json!({
            "repoSlug": "api",
            "title": "Add search",
            "sourceBranch": "feature/search",
            "closeSourceBranch": true
        }))
        .unwrap();
        assert_eq!(args.destination_branch, None);
        assert_eq!(args.close_source_branch, Some(true));
    }
}
