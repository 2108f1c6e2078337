//
//  bitbucket-search
//  tools/workspaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{check_required, PaginationArgs};
use super::{Validate, ValidationIssue};

/// Arguments for listing Bitbucket workspaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListWorkspacesToolArgs {
    #[serde(flatten)]
    pub pagination: PaginationArgs,
}

impl Validate for ListWorkspacesToolArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        self.pagination.validate()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetWorkspaceToolArgs {
    /// Workspace slug to show. Example: "myteam"
    #[schemars(length(min = 1))]
    pub workspace_slug: String,
}

impl Validate for GetWorkspaceToolArgs {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        check_required(
            &mut issues,
            "workspaceSlug",
            &self.workspace_slug,
            "Workspace slug is required",
        );
        issues
    }
}
