//
//  bitbucket-search
//  api/cloud/workspaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud workspace API types.
//!
//! Workspaces are the top-level namespace in Bitbucket Cloud. Every search is
//! scoped to one. When the caller names none and no default is configured,
//! the first workspace returned by `GET /user/permissions/workspaces` is used.
//!
//! # Workspace Hierarchy
//!
//! ```text
//! Workspace
//! ├── Projects (optional grouping)
//! │   └── Repositories
//! └── Repositories (not in projects)
//! ```

use serde::{Deserialize, Serialize};

/// Represents a Bitbucket Cloud workspace.
///
/// # Notes
///
/// - The slug is used in URLs: `bitbucket.org/{slug}/{repo}`
/// - Workspace names can contain spaces; slugs cannot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    /// Unique identifier for the workspace (includes curly braces).
    #[serde(default)]
    pub uuid: Option<String>,

    /// URL-safe identifier used in API paths and repository URLs.
    pub slug: String,

    /// Human-readable name of the workspace.
    #[serde(default)]
    pub name: Option<String>,

    /// Whether the workspace is private.
    #[serde(default)]
    pub is_private: bool,
}

/// One entry of `GET /user/permissions/workspaces`.
///
/// # Example
///
/// ```rust
/// use bitbucket_search::api::cloud::workspaces::WorkspacePermission;
///
/// let entry: WorkspacePermission = serde_json::from_str(r#"{
///     "permission": "owner",
///     "workspace": {"slug": "myteam", "name": "My Team"}
/// }"#).unwrap();
/// assert_eq!(entry.workspace.slug, "myteam");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspacePermission {
    /// `owner`, `collaborator` or `member`.
    #[serde(default)]
    pub permission: Option<String>,

    pub workspace: Workspace,
}
