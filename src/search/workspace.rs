//
//  bitbucket-search
//  search/workspace.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Fallback workspace for requests that do not name one.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::api::cloud::workspaces::WorkspacePermission;
use crate::api::common::PaginatedResponse;
use crate::api::BitbucketClient;

/// Supplies the workspace used when a request omits `workspaceSlug`.
///
/// `Ok(None)` means there is no default; the controller then answers with an
/// in-band error. `Err` is treated as a failure of the whole search.
#[async_trait]
pub trait DefaultWorkspace: Send + Sync {
    async fn resolve(&self) -> Result<Option<String>>;
}

/// A fixed default, typically injected by a tool host or a test.
#[derive(Debug, Clone, Default)]
pub struct StaticWorkspace(Option<String>);

impl StaticWorkspace {
    pub fn new(workspace: Option<String>) -> Self {
        Self(workspace)
    }
}

#[async_trait]
impl DefaultWorkspace for StaticWorkspace {
    async fn resolve(&self) -> Result<Option<String>> {
        Ok(self.0.clone())
    }
}

/// The CLI's resolver.
///
/// Uses the configured default (`BB_DEFAULT_WORKSPACE` or `default_workspace`
/// in the config file, already merged by [`Config::load`]) and otherwise
/// asks Bitbucket for the first workspace the credentials can access.
///
/// [`Config::load`]: crate::config::Config::load
pub struct ConfiguredWorkspace {
    configured: Option<String>,
    client: Arc<BitbucketClient>,
}

impl ConfiguredWorkspace {
    pub fn new(configured: Option<String>, client: Arc<BitbucketClient>) -> Self {
        Self { configured, client }
    }

    async fn first_accessible(&self) -> Result<Option<String>> {
        let page: PaginatedResponse<WorkspacePermission> = self
            .client
            .get_with_query("/user/permissions/workspaces", &[("pagelen", "1".to_string())])
            .await?;

        Ok(page.values.into_iter().next().map(|p| p.workspace.slug))
    }
}

#[async_trait]
impl DefaultWorkspace for ConfiguredWorkspace {
    async fn resolve(&self) -> Result<Option<String>> {
        if let Some(workspace) = &self.configured {
            debug!("Using configured default workspace {}", workspace);
            return Ok(Some(workspace.clone()));
        }

        match self.first_accessible().await {
            Ok(found) => {
                debug!("Default workspace from account permissions: {:?}", found);
                Ok(found)
            }
            Err(e) => {
                debug!("Could not look up a default workspace: {:#}", e);
                Ok(None)
            }
        }
    }
}
