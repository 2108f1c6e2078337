//
//  bitbucket-search
//  tools/repositories.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Arguments of the repository tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{check_required, PaginationArgs, RepoIdentifierArgs};
use super::{Validate, ValidationIssue};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListRepositoriesToolArgs {
    /// Workspace slug. If omitted, the default workspace is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_slug: Option<String>,

    /// Text matched against repository names and descriptions. Example: "api"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Sort field such as "name" or "-updated_on" (leading "-" for descending).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    /// Only repositories where the user has this role: "owner", "admin",
    /// "contributor" or "member".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Only repositories in this project. Example: "project-api"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_key: Option<String>,

    #[serde(flatten)]
    pub pagination: PaginationArgs,
}

impl Validate for ListRepositoriesToolArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        self.pagination.validate()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetRepositoryToolArgs {
    #[serde(flatten)]
    pub repo: RepoIdentifierArgs,
}

impl Validate for GetRepositoryToolArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        self.repo.validate()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCommitHistoryToolArgs {
    #[serde(flatten)]
    pub repo: RepoIdentifierArgs,

    /// Branch, tag or commit to start from. Defaults to the main branch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,

    /// Only commits touching this file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(flatten)]
    pub pagination: PaginationArgs,
}

impl Validate for GetCommitHistoryToolArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = self.repo.validate();
        issues.extend(self.pagination.validate());
        issues
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBranchToolArgs {
    #[serde(flatten)]
    pub repo: RepoIdentifierArgs,

    /// Name of the new branch.
    #[schemars(length(min = 1))]
    pub new_branch_name: String,

    /// Branch name or commit hash to branch from.
    #[schemars(length(min = 1))]
    pub source_branch_or_commit: String,
}

impl Validate for CreateBranchToolArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = self.repo.validate();
        check_required(
            &mut issues,
            "newBranchName",
            &self.new_branch_name,
            "New branch name is required",
        );
        check_required(
            &mut issues,
            "sourceBranchOrCommit",
            &self.source_branch_or_commit,
            "Source branch or commit is required",
        );
        issues
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CloneRepositoryToolArgs {
    #[serde(flatten)]
    pub repo: RepoIdentifierArgs,

    /// Directory to clone into; the repository lands in `targetPath/repoSlug`.
    /// Prefer absolute paths.
    #[schemars(length(min = 1))]
    pub target_path: String,
}

impl Validate for CloneRepositoryToolArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = self.repo.validate();
        check_required(
            &mut issues,
            "targetPath",
            &self.target_path,
            "Target path is required",
        );
        issues
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetFileContentToolArgs {
    #[serde(flatten)]
    pub repo: RepoIdentifierArgs,

    /// Path within the repository. Example: "src/main.rs"
    #[schemars(length(min = 1))]
    pub file_path: String,

    /// Branch, tag or commit. Defaults to the main branch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}

impl Validate for GetFileContentToolArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = self.repo.validate();
        check_required(&mut issues, "filePath", &self.file_path, "File path is required");
        issues
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListBranchesToolArgs {
    #[serde(flatten)]
    pub repo: RepoIdentifierArgs,

    /// Text matched against branch names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Sort field: "name" (default), "-name" or "target.date".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    #[serde(flatten)]
    pub pagination: PaginationArgs,
}

impl Validate for ListBranchesToolArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = self.repo.validate();
        issues.extend(self.pagination.validate());
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::parse_tool_args;
    use serde_json::json;

    #[test]
    fn test_flattened_fields_parse() {
        let args = parse_tool_args::<GetCommitHistoryToolArgs>(json!({
            "workspaceSlug": "myteam",
            "repoSlug": "api",
            "path": "src/lib.rs",
            "limit": 5,
            "cursor": "2"
        }))
        .unwrap();

        assert_eq!(args.repo.repo_slug, "api");
        assert_eq!(args.path.as_deref(), Some("src/lib.rs"));
        assert_eq!(args.pagination.limit, Some(5));
        assert_eq!(args.pagination.cursor.as_deref(), Some("2"));
    }

    #[test]
    fn test_create_branch_reports_both_names() {
        let err = parse_tool_args::<CreateBranchToolArgs>(json!({
            "repoSlug": "api",
            "newBranchName": "",
            "sourceBranchOrCommit": ""
        }))
        .unwrap_err();

        let paths: Vec<_> = err.issues().into_iter().map(|i| i.path.join(".")).collect();
        assert_eq!(paths, vec!["newBranchName", "sourceBranchOrCommit"]);
    }

    #[test]
    fn test_list_branches_checks_repo_and_limit() {
        let err = parse_tool_args::<ListBranchesToolArgs>(json!({
            "repoSlug": "",
            "limit": 1000
        }))
        .unwrap_err();
        assert_eq!(err.issues().len(), 2);
    }

    #[test]
    fn test_list_repositories_everything_optional() {
        let args = parse_tool_args::<ListRepositoriesToolArgs>(json!({"role": "owner"})).unwrap();
        assert_eq!(args.role.as_deref(), Some("owner"));
        assert_eq!(args.workspace_slug, None);
    }
}
