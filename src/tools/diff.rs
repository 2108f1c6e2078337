//
//  bitbucket-search
//  tools/diff.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Arguments of the diff tools.
//!
//! Unlike the list tools, the diff cursor is a page number, so it is an
//! integer here rather than an opaque string.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{check_positive, check_required, RepoIdentifierArgs};
use super::{Validate, ValidationIssue};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BranchDiffToolArgs {
    #[serde(flatten)]
    pub repo: RepoIdentifierArgs,

    /// Branch with the changes. Output reads "destinationBranch → sourceBranch".
    #[schemars(length(min = 1))]
    pub source_branch: String,

    /// Branch to compare against. Defaults to "main".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_branch: Option<String>,

    /// Include the full diff, not just the changed files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_full_diff: Option<bool>,

    /// Maximum number of changed files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub limit: Option<i64>,

    /// Page of changed files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub cursor: Option<i64>,
}

impl Validate for BranchDiffToolArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = self.repo.validate();
        check_required(
            &mut issues,
            "sourceBranch",
            &self.source_branch,
            "Source branch is required",
        );
        check_positive(&mut issues, &["limit"], self.limit);
        check_positive(&mut issues, &["cursor"], self.cursor);
        issues
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommitDiffToolArgs {
    #[serde(flatten)]
    pub repo: RepoIdentifierArgs,

    /// Newer commit hash or reference.
    #[schemars(length(min = 1))]
    pub since_commit: String,

    /// Older commit hash or reference.
    #[schemars(length(min = 1))]
    pub until_commit: String,

    /// Include the full diff, not just the changed files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_full_diff: Option<bool>,

    /// Maximum number of changed files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub limit: Option<i64>,

    /// Page of changed files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub cursor: Option<i64>,
}

impl Validate for CommitDiffToolArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = self.repo.validate();
        check_required(
            &mut issues,
            "sinceCommit",
            &self.since_commit,
            "sinceCommit is required",
        );
        check_required(
            &mut issues,
            "untilCommit",
            &self.until_commit,
            "untilCommit is required",
        );
        check_positive(&mut issues, &["limit"], self.limit);
        check_positive(&mut issues, &["cursor"], self.cursor);
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{parse_tool_args, ToolArgsError};
    use serde_json::json;

    #[test]
    fn test_branch_diff_cursor_must_be_positive() {
        let err = parse_tool_args::<BranchDiffToolArgs>(json!({
            "repoSlug": "api",
            "sourceBranch": "feature/x",
            "cursor": 0
        }))
        .unwrap_err();
        assert_eq!(
            err.issues(),
            vec![ValidationIssue::new(&["cursor"], "cursor must be a positive integer")]
        );
    }

    #[test]
    fn test_branch_diff_cursor_is_numeric() {
        let err = parse_tool_args::<BranchDiffToolArgs>(json!({
            "repoSlug": "api",
            "sourceBranch": "feature/x",
            "cursor": "abc"
        }))
        .unwrap_err();
        assert!(matches!(err, ToolArgsError::Malformed(_)));
    }

    #[test]
    fn test_commit_diff() {
        let args = parse_tool_args::<CommitDiffToolArgs>(json!({
            "repoSlug": "api",
            "sinceCommit": "abc123",
            "untilCommit": "def456",
            "limit": 10
        }))
        .unwrap();
        assert_eq!(args.limit, Some(10));
        assert_eq!(args.include_full_diff, None);
    }
}
