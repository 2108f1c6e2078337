//
//  bitbucket-search
//  tools/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Tool Argument Schemas
//!
//! Argument types for every Bitbucket tool operation, as an agent host sees
//! them. Each type derives `JsonSchema` for schema export and implements
//! [`Validate`] for the constraints JSON Schema types alone do not enforce
//! (non-empty strings, numeric bounds, cross-field rules).
//!
//! Validation never panics or short-circuits: every problem is collected as a
//! [`ValidationIssue`] with the path of the offending field, and the caller
//! decides whether to print or raise them.
//!
//! ## Example
//!
//! ```rust
//! use bitbucket_search::tools::{find_tool, ToolArgsError};
//! use serde_json::json;
//!
//! let search = find_tool("search").unwrap();
//! let err = search
//!     .validate(json!({"query": "bug", "scope": "pullrequests"}))
//!     .unwrap_err();
//!
//! match err {
//!     ToolArgsError::Invalid(issues) => {
//!         assert_eq!(issues[0].path, vec!["repoSlug"]);
//!         assert_eq!(issues[0].message, r#"repoSlug is required when scope is "pullrequests""#);
//!     }
//!     other => panic!("unexpected: {other}"),
//! }
//! ```

mod common;
mod diff;
mod pullrequests;
mod repositories;
mod search;
mod workspaces;

pub use common::*;
pub use diff::*;
pub use pullrequests::*;
pub use repositories::*;
pub use search::*;
pub use workspaces::*;

use std::fmt;

use schemars::{JsonSchema, Schema};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// One failed constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Field names from the payload root down to the offending value.
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: &[&str], message: impl Into<String>) -> Self {
        Self {
            path: path.iter().map(|p| p.to_string()).collect(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path.join("."), self.message)
        }
    }
}

#[derive(Debug, Error)]
pub enum ToolArgsError {
    /// The payload parsed but broke one or more constraints.
    #[error("Invalid tool arguments: {}", join_issues(.0))]
    Invalid(Vec<ValidationIssue>),

    /// The payload is not valid JSON or does not have the expected shape.
    #[error("Malformed tool arguments: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Unknown tool \"{0}\"")]
    UnknownTool(String),
}

impl ToolArgsError {
    /// The issues to report, one per line for malformed payloads too.
    pub fn issues(&self) -> Vec<ValidationIssue> {
        match self {
            Self::Invalid(issues) => issues.clone(),
            Self::Malformed(e) => vec![ValidationIssue::new(&[], e.to_string())],
            Self::UnknownTool(name) => {
                vec![ValidationIssue::new(&[], format!("Unknown tool \"{}\"", name))]
            }
        }
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Constraints checked after deserialization.
pub trait Validate {
    fn validate(&self) -> Vec<ValidationIssue>;
}

/// Deserializes and validates a tool payload.
///
/// # Errors
///
/// [`ToolArgsError::Malformed`] if the JSON does not fit `T`,
/// [`ToolArgsError::Invalid`] if any constraint fails.
pub fn parse_tool_args<T>(args: serde_json::Value) -> Result<T, ToolArgsError>
where
    T: DeserializeOwned + Validate,
{
    let parsed: T = serde_json::from_value(args)?;
    let issues = parsed.validate();
    if issues.is_empty() {
        Ok(parsed)
    } else {
        Err(ToolArgsError::Invalid(issues))
    }
}

/// A tool operation: its name, what it does and the shape of its arguments.
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    schema: fn() -> Schema,
    check: fn(serde_json::Value) -> Result<(), ToolArgsError>,
}

impl ToolDefinition {
    /// JSON Schema for the arguments.
    pub fn schema(&self) -> Schema {
        (self.schema)()
    }

    /// Checks a payload without running the tool.
    pub fn validate(&self, args: serde_json::Value) -> Result<(), ToolArgsError> {
        (self.check)(args)
    }
}

fn schema_of<T: JsonSchema>() -> Schema {
    schemars::schema_for!(T)
}

fn check_as<T: DeserializeOwned + Validate>(args: serde_json::Value) -> Result<(), ToolArgsError> {
    parse_tool_args::<T>(args).map(|_| ())
}

macro_rules! tool {
    ($name:literal, $args:ty, $description:literal) => {
        ToolDefinition {
            name: $name,
            description: $description,
            schema: schema_of::<$args>,
            check: check_as::<$args>,
        }
    };
}

static TOOLS: &[ToolDefinition] = &[
    tool!(
        "search",
        SearchToolArgs,
        "Search code, content, repositories or pull requests in a workspace"
    ),
    tool!(
        "list_workspaces",
        ListWorkspacesToolArgs,
        "List workspaces the credentials can access"
    ),
    tool!(
        "get_workspace",
        GetWorkspaceToolArgs,
        "Show a workspace and its projects"
    ),
    tool!(
        "list_repositories",
        ListRepositoriesToolArgs,
        "List repositories in a workspace"
    ),
    tool!(
        "get_repository",
        GetRepositoryToolArgs,
        "Show repository details"
    ),
    tool!(
        "get_commit_history",
        GetCommitHistoryToolArgs,
        "List commits for a revision or path"
    ),
    tool!(
        "create_branch",
        CreateBranchToolArgs,
        "Create a branch from a branch or commit"
    ),
    tool!(
        "clone_repository",
        CloneRepositoryToolArgs,
        "Clone a repository to a local directory"
    ),
    tool!(
        "get_file_content",
        GetFileContentToolArgs,
        "Read a file at a revision"
    ),
    tool!(
        "list_branches",
        ListBranchesToolArgs,
        "List branches in a repository"
    ),
    tool!(
        "list_pull_requests",
        ListPullRequestsToolArgs,
        "List pull requests in a repository"
    ),
    tool!(
        "get_pull_request",
        GetPullRequestToolArgs,
        "Show a pull request with its diff and comments"
    ),
    tool!(
        "list_pull_request_comments",
        ListPullRequestCommentsToolArgs,
        "List comments on a pull request"
    ),
    tool!(
        "create_pull_request_comment",
        CreatePullRequestCommentToolArgs,
        "Comment on a pull request, optionally on a line"
    ),
    tool!(
        "create_pull_request",
        CreatePullRequestToolArgs,
        "Open a pull request"
    ),
    tool!(
        "branch_diff",
        BranchDiffToolArgs,
        "Show changes between two branches"
    ),
    tool!(
        "commit_diff",
        CommitDiffToolArgs,
        "Show changes between two commits"
    ),
];

/// Every known tool, in a stable order.
pub fn registry() -> &'static [ToolDefinition] {
    TOOLS
}

/// Looks a tool up by name.
pub fn find_tool(name: &str) -> Option<&'static ToolDefinition> {
    TOOLS.iter().find(|t| t.name == name)
}
