//
//  bitbucket-search
//  tools/common.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Argument groups shared by several tools, and the checks behind them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Validate, ValidationIssue};
use crate::search::MAX_PAGE_SIZE;

/// `limit` and `cursor` for list operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationArgs {
    /// Maximum number of items to return (1-100). Defaults to 25 if omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 100))]
    pub limit: Option<i64>,

    /// Pagination cursor from a previous response's "Next page cursor".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl Validate for PaginationArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        check_limit(&mut issues, self.limit);
        issues
    }
}

/// Identifies a repository. The workspace falls back to the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RepoIdentifierArgs {
    /// Workspace slug. If omitted, the default workspace is used. Example: "myteam"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_slug: Option<String>,

    /// Repository slug. Example: "project-api"
    #[schemars(length(min = 1))]
    pub repo_slug: String,
}

impl Validate for RepoIdentifierArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        check_required(
            &mut issues,
            "repoSlug",
            &self.repo_slug,
            "Repository slug is required",
        );
        issues
    }
}

/// Identifies a pull request within a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestIdentifierArgs {
    #[serde(flatten)]
    pub repo: RepoIdentifierArgs,

    /// Numeric ID of the pull request as a string. Example: "42"
    #[schemars(length(min = 1))]
    pub pr_id: String,
}

impl Validate for PullRequestIdentifierArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = self.repo.validate();
        check_required(&mut issues, "prId", &self.pr_id, "Pull request ID is required");
        issues
    }
}

/// Pushes an issue if `value` is empty.
pub(crate) fn check_required(
    issues: &mut Vec<ValidationIssue>,
    field: &str,
    value: &str,
    message: &str,
) {
    if value.is_empty() {
        issues.push(ValidationIssue::new(&[field], message));
    }
}

/// Pushes an issue unless `limit` is absent or within `1..=100`.
pub(crate) fn check_limit(issues: &mut Vec<ValidationIssue>, limit: Option<i64>) {
    if let Some(limit) = limit {
        if !(1..=i64::from(MAX_PAGE_SIZE)).contains(&limit) {
            issues.push(ValidationIssue::new(
                &["limit"],
                format!("limit must be between 1 and {}", MAX_PAGE_SIZE),
            ));
        }
    }
}

/// Pushes an issue unless `value` is absent or at least 1.
pub(crate) fn check_positive(issues: &mut Vec<ValidationIssue>, path: &[&str], value: Option<i64>) {
    if let Some(value) = value {
        if value < 1 {
            issues.push(ValidationIssue::new(
                path,
                format!("{} must be a positive integer", path.join(".")),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{parse_tool_args, ToolArgsError};
    use serde_json::json;

    #[test]
    fn test_limit_bounds() {
        for (limit, ok) in [(0, false), (1, true), (100, true), (101, false), (-5, false)] {
            let args = PaginationArgs {
                limit: Some(limit),
                cursor: None,
            };
            assert_eq!(args.validate().is_empty(), ok, "limit {}", limit);
        }
        assert!(PaginationArgs::default().validate().is_empty());
    }

    #[test]
    fn test_pull_request_identifier_reports_every_empty_field() {
        let err = parse_tool_args::<PullRequestIdentifierArgs>(json!({
            "repoSlug": "",
            "prId": ""
        }))
        .unwrap_err();

        let ToolArgsError::Invalid(issues) = err else {
            panic!("expected invalid");
        };
        let paths: Vec<_> = issues.iter().map(|i| i.path.join(".")).collect();
        assert_eq!(paths, vec!["repoSlug", "prId"]);
    }

    #[test]
    fn test_missing_required_field_is_malformed() {
        let err = parse_tool_args::<RepoIdentifierArgs>(json!({"workspaceSlug": "myteam"}))
            .unwrap_err();
        assert!(matches!(err, ToolArgsError::Malformed(_)));
    }
}
